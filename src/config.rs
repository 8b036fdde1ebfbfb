//! Process configuration from command-line flags and environment.

use std::num::NonZeroUsize;

use clap::{Args, Parser, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,
    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Product catalog microservice.
#[derive(Debug, Parser)]
#[command(name = "products-ms", about = "Product catalog served over newline-delimited JSON packets", version)]
pub struct Config {
    /// Mailbox size of the record store actor.
    #[arg(long, env = "PRODUCTS_CHANNEL_CAPACITY", default_value = "32")]
    pub channel_capacity: NonZeroUsize,

    #[command(flatten)]
    pub logging: LoggingConfig,
}
