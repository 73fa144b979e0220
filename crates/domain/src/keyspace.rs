use crate::server_role::ServerRole;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Type of the column a keyspace is sharded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShardingKeyType {
    Uint64,
    Bytes,
}

impl fmt::Display for ShardingKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShardingKeyType::Uint64 => f.write_str("uint64"),
            ShardingKeyType::Bytes => f.write_str("bytes"),
        }
    }
}

/// The shards a server role is partitioned across.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardPartition {
    pub shards: Vec<String>,
}

/// Serving metadata for one keyspace in one cell.
///
/// The cache stores and returns this record without interpreting most
/// fields; only the status renderer reads into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServingKeyspace {
    /// Partition map per server role.
    #[serde(default)]
    pub partitions: HashMap<ServerRole, ShardPartition>,
    /// Roles this keyspace serves in the cell.
    #[serde(default)]
    pub served_roles: Vec<ServerRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharding_column_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharding_column_type: Option<ShardingKeyType>,
    /// Roles redirected to another keyspace (during migrations).
    #[serde(default)]
    pub served_from: HashMap<ServerRole, String>,
}
