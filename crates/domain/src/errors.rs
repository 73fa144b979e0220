use thiserror::Error;

/// Cached errors are re-served within a TTL window, so this type is `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Topology server unavailable: {0}")]
    TopologyUnavailable(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid server role: {0}")]
    InvalidServerRole(String),

    #[error("Invalid topology data: {0}")]
    InvalidTopologyData(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
