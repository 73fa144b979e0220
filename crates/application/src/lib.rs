//! Topograph Application Layer
pub mod ports;

pub use ports::TopologyClient;
