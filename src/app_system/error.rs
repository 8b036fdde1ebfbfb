use thiserror::Error;

/// Failures of the hosting process itself, outside any catalog call.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error("transport I/O failed: {0}")]
    Transport(#[from] std::io::Error),
    #[error("actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
