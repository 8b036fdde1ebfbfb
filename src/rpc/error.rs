use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP-style status codes carried by remote errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcStatus {
    BadRequest,
    NotFound,
    InternalServerError,
}

impl RpcStatus {
    pub fn code(self) -> u16 {
        match self {
            RpcStatus::BadRequest => 400,
            RpcStatus::NotFound => 404,
            RpcStatus::InternalServerError => 500,
        }
    }
}

/// Structured error returned to remote callers.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{status}: {message}")]
pub struct RpcError {
    pub status: u16,
    pub message: String,
}

impl RpcError {
    pub fn new(status: RpcStatus, message: impl Into<String>) -> Self {
        Self { status: status.code(), message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(RpcStatus::BadRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(RpcStatus::InternalServerError, message)
    }

    /// The call named a pattern nothing is registered for.
    pub fn no_handler() -> Self {
        Self::bad_request("There is no matching message handler defined in the remote service.")
    }
}
