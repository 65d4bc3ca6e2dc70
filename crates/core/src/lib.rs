//! Functional core for dynoserv.
//!
//! Pure types, traits and functions shared by every storage backend. Nothing
//! in this crate performs I/O.

pub mod projection;
pub mod record;
pub mod service;
pub mod storage;
