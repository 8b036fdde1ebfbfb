use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::rpc::{RpcError, RpcStatus};

/// Errors surfaced by catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The identifier does not resolve to a visible product.
    #[error("Product with id #{id} not found")]
    NotFound { id: u64 },
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),
    /// Any other store failure, passed through as the store reported it.
    #[error(transparent)]
    Store(#[from] FrameworkError),
}

impl CatalogError {
    /// Translates the store's zero-match outcome for a conditional write into
    /// `NotFound` for `id`. Every other store failure is passed through unchanged.
    pub fn from_store(error: FrameworkError, id: u64) -> Self {
        match error {
            FrameworkError::RecordNotFound => Self::NotFound { id },
            other => Self::Store(other),
        }
    }

    pub fn status(&self) -> RpcStatus {
        match self {
            CatalogError::NotFound { .. } => RpcStatus::NotFound,
            CatalogError::InvalidPagination(_) => RpcStatus::BadRequest,
            CatalogError::Store(_) => RpcStatus::InternalServerError,
        }
    }
}

impl From<CatalogError> for RpcError {
    fn from(error: CatalogError) -> Self {
        RpcError::new(error.status(), error.to_string())
    }
}
