use serde::Serialize;
use std::collections::HashMap;

use topograph_domain::{Endpoint, ServerRole, ServingKeyspace};
use topograph_infrastructure::topology::{
    EndpointsCacheStatus, KeyspaceCacheStatus, NamesCacheStatus, TopologyCacheStatus,
};

#[derive(Serialize, Debug, Clone)]
pub struct CountersResponse {
    pub name: String,
    pub counts: HashMap<String, i64>,
}

#[derive(Serialize, Debug, Clone)]
pub struct NamesCacheResponse {
    pub cell: String,
    pub value: Option<Vec<String>>,
    pub last_error: Option<String>,
}

impl From<NamesCacheStatus> for NamesCacheResponse {
    fn from(status: NamesCacheStatus) -> Self {
        Self {
            cell: status.cell,
            value: status.value,
            last_error: status.last_error.map(|e| e.to_string()),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct KeyspaceCacheResponse {
    pub cell: String,
    pub keyspace: String,
    pub value: Option<ServingKeyspace>,
    pub last_error: Option<String>,
}

impl From<KeyspaceCacheStatus> for KeyspaceCacheResponse {
    fn from(status: KeyspaceCacheStatus) -> Self {
        Self {
            cell: status.cell,
            keyspace: status.keyspace,
            value: status.value,
            last_error: status.last_error.map(|e| e.to_string()),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct EndpointsCacheResponse {
    pub cell: String,
    pub keyspace: String,
    pub shard: String,
    pub role: ServerRole,
    /// Served (filtered) endpoints.
    pub value: Option<Vec<Endpoint>>,
    /// Unfiltered endpoints from the directory.
    pub original_value: Option<Vec<Endpoint>>,
    pub last_error: Option<String>,
}

impl From<EndpointsCacheStatus> for EndpointsCacheResponse {
    fn from(status: EndpointsCacheStatus) -> Self {
        Self {
            cell: status.cell,
            keyspace: status.keyspace,
            shard: status.shard,
            role: status.role,
            value: status.value,
            original_value: status.original_value,
            last_error: status.last_error.map(|e| e.to_string()),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatusResponse {
    pub names: Vec<NamesCacheResponse>,
    pub keyspaces: Vec<KeyspaceCacheResponse>,
    pub endpoints: Vec<EndpointsCacheResponse>,
}

impl From<TopologyCacheStatus> for CacheStatusResponse {
    fn from(status: TopologyCacheStatus) -> Self {
        Self {
            names: status.names.into_iter().map(Into::into).collect(),
            keyspaces: status.keyspaces.into_iter().map(Into::into).collect(),
            endpoints: status.endpoints.into_iter().map(Into::into).collect(),
        }
    }
}
