//! Configuration for the topograph server, organized by concern:
//! - `root`: main configuration, file loading and CLI overrides
//! - `server`: HTTP status/API binding
//! - `topology`: cache TTL and upstream directory settings
//! - `logging`: logging settings

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod topology;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use topology::TopologyConfig;
