use async_trait::async_trait;

use crate::record::{Id, Record};

use super::{FindResult, Params, Result};

/// A CRUD service mounted on a path of the service registry.
#[async_trait]
pub trait Service: Send + Sync {
    /// Lists records, optionally filtered, projected and paginated.
    async fn find(&self, params: &Params) -> Result<FindResult>;

    /// Gets a record by id. `None` when it does not exist.
    async fn get(&self, id: &Id, params: &Params) -> Result<Option<Record>>;

    /// Creates a record, assigning an id if it has none.
    async fn create(&self, data: Record, params: &Params) -> Result<Record>;

    /// Creates several records, returning them in input order.
    async fn create_many(&self, data: Vec<Record>, params: &Params) -> Result<Vec<Record>>;

    /// Merges attributes into an existing record, like [`Service::patch`],
    /// but announces the change as an update. `None` when it does not exist.
    async fn update(&self, id: &Id, data: Record, params: &Params) -> Result<Option<Record>>;

    /// Merges attributes into an existing record. `null` values remove the
    /// attribute.
    async fn patch(&self, id: &Id, data: Record, params: &Params) -> Result<Option<Record>>;

    /// Removes a record and returns it. `id = None` requests a bulk remove.
    async fn remove(&self, id: Option<&Id>, params: &Params) -> Result<Option<Record>>;

    /// Publishes a custom event. The name must be registered on the service.
    fn emit(&self, name: &str, data: Record) -> Result<()>;
}
