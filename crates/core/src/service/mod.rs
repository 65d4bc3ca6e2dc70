//! The generic CRUD service contract.

mod error;
mod functions;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, ServiceError};
pub use functions::{effective_limit, paginate};
pub use http_mapping::service_error_to_status_code;
pub use traits::Service;
pub use types::{
    EventKind, FindResult, Page, Paginate, Params, Query, ServiceEvent, ServiceOptions,
};
