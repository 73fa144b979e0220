//! Topograph Infrastructure Layer
pub mod topology;

pub use topology::{FileDirectoryClient, ResilientTopology, TopologyCacheStatus};
