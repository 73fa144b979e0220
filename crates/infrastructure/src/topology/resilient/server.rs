use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use topograph_application::TopologyClient;
use topograph_domain::{DomainError, Endpoint, ServerRole, ServingKeyspace};

use super::counters::{Counters, QUERY};
use super::entry::Slot;
use crate::topology::health_filter::filter_lagged;

pub(super) struct NamesEntry {
    pub(super) cell: String,
    pub(super) slot: Slot<Vec<String>>,
}

pub(super) struct KeyspaceEntry {
    pub(super) cell: String,
    pub(super) keyspace: String,
    pub(super) slot: Slot<ServingKeyspace>,
}

/// Both faces of a cached endpoints fetch: what the directory returned
/// and what is served after lag filtering.
#[derive(Debug, Clone)]
pub(super) struct EndpointsValue {
    pub(super) upstream: Vec<Endpoint>,
    pub(super) serving: Vec<Endpoint>,
}

impl EndpointsValue {
    fn from_upstream(upstream: Vec<Endpoint>) -> Self {
        Self {
            serving: filter_lagged(upstream.clone()),
            upstream,
        }
    }
}

pub(super) struct EndpointsEntry {
    pub(super) cell: String,
    pub(super) keyspace: String,
    pub(super) shard: String,
    pub(super) role: ServerRole,
    pub(super) slot: Slot<EndpointsValue>,
}

/// The three caches, keyed by composite strings. The mutex guards the
/// maps themselves, not the entries; lock order is always maps before
/// entry, never the reverse.
#[derive(Default)]
pub(super) struct TopologyCaches {
    pub(super) names: FxHashMap<String, Arc<NamesEntry>>,
    pub(super) keyspaces: FxHashMap<String, Arc<KeyspaceEntry>>,
    pub(super) endpoints: FxHashMap<String, Arc<EndpointsEntry>>,
}

/// Caching decorator around a [`TopologyClient`].
///
/// Serves two purposes: it bounds the query rate against the upstream
/// directory, and it keeps answering from the last known value when
/// the upstream fails. Entries are created on first use and live for
/// the process; key cardinality is bounded by the topology itself.
pub struct ResilientTopology {
    upstream: Arc<dyn TopologyClient>,
    cache_ttl: Duration,
    counters: Counters,
    pub(super) caches: Mutex<TopologyCaches>,
}

impl ResilientTopology {
    pub fn new(
        upstream: Arc<dyn TopologyClient>,
        cache_ttl: Duration,
        counters_name: impl Into<String>,
    ) -> Self {
        Self {
            upstream,
            cache_ttl,
            counters: Counters::new(counters_name),
            caches: Mutex::new(TopologyCaches::default()),
        }
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub async fn keyspace_names(&self, cell: &str) -> Result<Vec<String>, DomainError> {
        self.counters.add(QUERY, 1);

        let entry = {
            let mut caches = self.caches.lock().await;
            Arc::clone(caches.names.entry(cell.to_string()).or_insert_with(|| {
                Arc::new(NamesEntry {
                    cell: cell.to_string(),
                    slot: Slot::new(),
                })
            }))
        };

        entry
            .slot
            .read_through(self.cache_ttl, &self.counters, "keyspace_names", cell, || {
                self.upstream.keyspace_names(cell)
            })
            .await
    }

    pub async fn keyspace(
        &self,
        cell: &str,
        keyspace: &str,
    ) -> Result<ServingKeyspace, DomainError> {
        self.counters.add(QUERY, 1);

        let key = format!("{cell}.{keyspace}");
        let entry = {
            let mut caches = self.caches.lock().await;
            Arc::clone(caches.keyspaces.entry(key.clone()).or_insert_with(|| {
                Arc::new(KeyspaceEntry {
                    cell: cell.to_string(),
                    keyspace: keyspace.to_string(),
                    slot: Slot::new(),
                })
            }))
        };

        entry
            .slot
            .read_through(self.cache_ttl, &self.counters, "keyspace", &key, || {
                self.upstream.keyspace(cell, keyspace)
            })
            .await
    }

    pub async fn endpoints(
        &self,
        cell: &str,
        keyspace: &str,
        shard: &str,
        role: ServerRole,
    ) -> Result<Vec<Endpoint>, DomainError> {
        self.counters.add(QUERY, 1);

        let key = format!("{cell}.{keyspace}.{shard}.{role}");
        let entry = {
            let mut caches = self.caches.lock().await;
            Arc::clone(caches.endpoints.entry(key.clone()).or_insert_with(|| {
                Arc::new(EndpointsEntry {
                    cell: cell.to_string(),
                    keyspace: keyspace.to_string(),
                    shard: shard.to_string(),
                    role,
                    slot: Slot::new(),
                })
            }))
        };

        let value = entry
            .slot
            .read_through(self.cache_ttl, &self.counters, "endpoints", &key, move || {
                async move {
                    let fetched = self.upstream.endpoints(cell, keyspace, shard, role).await?;
                    Ok(EndpointsValue::from_upstream(fetched))
                }
            })
            .await?;
        Ok(value.serving)
    }

    /// Per-key count of endpoints in the served (filtered) value.
    pub async fn healthy_endpoint_count(&self) -> HashMap<String, i64> {
        let caches = self.caches.lock().await;
        let mut result = HashMap::with_capacity(caches.endpoints.len());
        for (key, entry) in &caches.endpoints {
            let (value, _) = entry.slot.peek().await;
            let count = value.map_or(0, |v| v.serving.len() as i64);
            result.insert(key.clone(), count);
        }
        result
    }

    /// Per-key count of endpoints the lag filter removed from the
    /// served value (replicas present upstream but not served).
    pub async fn degraded_endpoint_count(&self) -> HashMap<String, i64> {
        let caches = self.caches.lock().await;
        let mut result = HashMap::with_capacity(caches.endpoints.len());
        for (key, entry) in &caches.endpoints {
            let (value, _) = entry.slot.peek().await;
            let count = value.map_or(0, |v| v.upstream.len() as i64 - v.serving.len() as i64);
            result.insert(key.clone(), count);
        }
        result
    }
}

#[async_trait]
impl TopologyClient for ResilientTopology {
    async fn keyspace_names(&self, cell: &str) -> Result<Vec<String>, DomainError> {
        ResilientTopology::keyspace_names(self, cell).await
    }

    async fn keyspace(&self, cell: &str, keyspace: &str) -> Result<ServingKeyspace, DomainError> {
        ResilientTopology::keyspace(self, cell, keyspace).await
    }

    async fn endpoints(
        &self,
        cell: &str,
        keyspace: &str,
        shard: &str,
        role: ServerRole,
    ) -> Result<Vec<Endpoint>, DomainError> {
        ResilientTopology::endpoints(self, cell, keyspace, shard, role).await
    }
}
