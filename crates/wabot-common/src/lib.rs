//! Common utilities shared across the Wabot workspace.

pub mod error;
pub mod logging;

pub use error::{Result, WabotError};
pub use logging::init_logging;
