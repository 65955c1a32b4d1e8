//! Shared plumbing for RunFlash binaries: environment configuration
//! and tracing setup.

pub mod config;
pub mod logging;

pub use config::{LogFormat, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use logging::init_logging;
