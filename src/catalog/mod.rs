//! The catalog service: visibility and pagination rules on top of the record store.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
