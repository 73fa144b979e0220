use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The function a server fulfills within a shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerRole {
    /// Accepts writes; one per shard.
    Primary,
    /// Serves low-latency replica reads.
    Replica,
    /// Serves batch and analytics reads.
    BatchRead,
}

impl ServerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerRole::Primary => "primary",
            ServerRole::Replica => "replica",
            ServerRole::BatchRead => "batch_read",
        }
    }
}

impl fmt::Display for ServerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ServerRole::Primary),
            "replica" => Ok(ServerRole::Replica),
            "batch_read" => Ok(ServerRole::BatchRead),
            other => Err(DomainError::InvalidServerRole(other.to_string())),
        }
    }
}
