use crate::health;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A serving instance as published in the topology directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Unique id within a cell.
    pub uid: u64,
    pub host: String,
    /// Named ports, e.g. "grpc" -> 15999.
    #[serde(default)]
    pub port_map: HashMap<String, u16>,
    /// Health labels keyed by dimension; absent dimensions mean healthy.
    #[serde(default)]
    pub health: HashMap<String, String>,
}

impl Endpoint {
    pub fn new(uid: u64, host: impl Into<String>) -> Self {
        Self {
            uid,
            host: host.into(),
            port_map: HashMap::new(),
            health: HashMap::new(),
        }
    }

    pub fn with_port(mut self, name: impl Into<String>, port: u16) -> Self {
        self.port_map.insert(name.into(), port);
        self
    }

    pub fn with_health_label(mut self, dimension: impl Into<String>, level: impl Into<String>) -> Self {
        self.health.insert(dimension.into(), level.into());
        self
    }

    /// True when the directory labels this endpoint as lagging too far
    /// behind its primary to serve fresh reads.
    pub fn has_high_replication_lag(&self) -> bool {
        self.health.get(health::REPLICATION_LAG).map(String::as_str)
            == Some(health::REPLICATION_LAG_HIGH)
    }
}
