#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use topograph_application::TopologyClient;
use topograph_domain::{DomainError, Endpoint, ServerRole, ServingKeyspace};

type Stored<V> = RwLock<HashMap<String, Result<V, DomainError>>>;

/// Scriptable in-memory directory. Counts upstream invocations per
/// operation; unknown keys answer with `NodeNotFound`.
pub struct MockTopologyClient {
    names: Stored<Vec<String>>,
    keyspaces: Stored<ServingKeyspace>,
    endpoints: Stored<Vec<Endpoint>>,
    names_calls: AtomicUsize,
    keyspace_calls: AtomicUsize,
    endpoints_calls: AtomicUsize,
    delay: RwLock<Option<Duration>>,
}

impl MockTopologyClient {
    pub fn new() -> Self {
        Self {
            names: RwLock::new(HashMap::new()),
            keyspaces: RwLock::new(HashMap::new()),
            endpoints: RwLock::new(HashMap::new()),
            names_calls: AtomicUsize::new(0),
            keyspace_calls: AtomicUsize::new(0),
            endpoints_calls: AtomicUsize::new(0),
            delay: RwLock::new(None),
        }
    }

    pub async fn set_names(&self, cell: &str, result: Result<Vec<String>, DomainError>) {
        self.names.write().await.insert(cell.to_string(), result);
    }

    pub async fn set_keyspace(
        &self,
        cell: &str,
        keyspace: &str,
        result: Result<ServingKeyspace, DomainError>,
    ) {
        self.keyspaces
            .write()
            .await
            .insert(format!("{cell}.{keyspace}"), result);
    }

    pub async fn set_endpoints(
        &self,
        cell: &str,
        keyspace: &str,
        shard: &str,
        role: ServerRole,
        result: Result<Vec<Endpoint>, DomainError>,
    ) {
        self.endpoints
            .write()
            .await
            .insert(format!("{cell}.{keyspace}.{shard}.{role}"), result);
    }

    /// Delay applied to every upstream call, to widen race windows.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn names_calls(&self) -> usize {
        self.names_calls.load(Ordering::SeqCst)
    }

    pub fn keyspace_calls(&self) -> usize {
        self.keyspace_calls.load(Ordering::SeqCst)
    }

    pub fn endpoints_calls(&self) -> usize {
        self.endpoints_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
    }

    async fn lookup<V: Clone>(stored: &Stored<V>, key: &str) -> Result<V, DomainError> {
        stored
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NodeNotFound(key.to_string())))
    }
}

impl Default for MockTopologyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TopologyClient for MockTopologyClient {
    async fn keyspace_names(&self, cell: &str) -> Result<Vec<String>, DomainError> {
        self.names_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Self::lookup(&self.names, cell).await
    }

    async fn keyspace(&self, cell: &str, keyspace: &str) -> Result<ServingKeyspace, DomainError> {
        self.keyspace_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Self::lookup(&self.keyspaces, &format!("{cell}.{keyspace}")).await
    }

    async fn endpoints(
        &self,
        cell: &str,
        keyspace: &str,
        shard: &str,
        role: ServerRole,
    ) -> Result<Vec<Endpoint>, DomainError> {
        self.endpoints_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Self::lookup(&self.endpoints, &format!("{cell}.{keyspace}.{shard}.{role}")).await
    }
}
