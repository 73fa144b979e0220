use serde::{Deserialize, Serialize};

/// Settings for the serving-graph cache and its upstream directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopologyConfig {
    /// How long cached topology entries are served, in milliseconds
    /// (default: 1000). The resilience behavior on upstream failure is
    /// independent of this window.
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,

    /// Name the cache counter group is exported under.
    #[serde(default = "default_counters_name")]
    pub counters_name: String,

    /// Path to the JSON directory snapshot used as the upstream.
    #[serde(default)]
    pub directory_file: Option<String>,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: default_cache_ttl_ms(),
            counters_name: default_counters_name(),
            directory_file: None,
        }
    }
}

fn default_cache_ttl_ms() -> u64 {
    1000
}

fn default_counters_name() -> String {
    "topology_cache".to_string()
}
