//! System orchestration, startup, and shutdown logic.

pub mod catalog_system;
pub mod logging;
pub mod error;
pub mod shutdown;

pub use catalog_system::*;
pub use logging::*;
pub use error::*;
pub use shutdown::*;
