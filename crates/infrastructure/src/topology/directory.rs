use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use topograph_application::TopologyClient;
use topograph_domain::{DomainError, Endpoint, ServerRole, ServingKeyspace};

/// On-disk shape of a directory snapshot:
/// cells -> keyspaces -> { serving metadata, shards -> role -> endpoints }.
#[derive(Debug, Deserialize)]
struct DirectorySnapshot {
    #[serde(default)]
    cells: HashMap<String, CellNode>,
}

#[derive(Debug, Deserialize)]
struct CellNode {
    #[serde(default)]
    keyspaces: HashMap<String, KeyspaceNode>,
}

#[derive(Debug, Deserialize)]
struct KeyspaceNode {
    #[serde(default)]
    serving: ServingKeyspace,
    #[serde(default)]
    shards: HashMap<String, ShardNode>,
}

#[derive(Debug, Deserialize)]
struct ShardNode {
    #[serde(default)]
    endpoints: HashMap<ServerRole, Vec<Endpoint>>,
}

/// Topology client backed by a JSON snapshot on disk.
///
/// Every call re-reads the file; the resilient cache in front of this
/// client is what bounds the re-read rate, the same way it bounds QPS
/// against a networked directory. Missing nodes map to
/// [`DomainError::NodeNotFound`].
pub struct FileDirectoryClient {
    path: PathBuf,
}

impl FileDirectoryClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<DirectorySnapshot, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), bytes = raw.len(), "Directory snapshot read");
        serde_json::from_str(&raw).map_err(|e| DomainError::InvalidTopologyData(e.to_string()))
    }
}

#[async_trait]
impl TopologyClient for FileDirectoryClient {
    async fn keyspace_names(&self, cell: &str) -> Result<Vec<String>, DomainError> {
        let snapshot = self.load().await?;
        let cell_node = snapshot
            .cells
            .get(cell)
            .ok_or_else(|| DomainError::NodeNotFound(format!("cells/{cell}")))?;
        let mut names: Vec<String> = cell_node.keyspaces.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn keyspace(&self, cell: &str, keyspace: &str) -> Result<ServingKeyspace, DomainError> {
        let snapshot = self.load().await?;
        snapshot
            .cells
            .get(cell)
            .and_then(|cell_node| cell_node.keyspaces.get(keyspace))
            .map(|node| node.serving.clone())
            .ok_or_else(|| DomainError::NodeNotFound(format!("cells/{cell}/{keyspace}")))
    }

    async fn endpoints(
        &self,
        cell: &str,
        keyspace: &str,
        shard: &str,
        role: ServerRole,
    ) -> Result<Vec<Endpoint>, DomainError> {
        let snapshot = self.load().await?;
        snapshot
            .cells
            .get(cell)
            .and_then(|cell_node| cell_node.keyspaces.get(keyspace))
            .and_then(|keyspace_node| keyspace_node.shards.get(shard))
            .and_then(|shard_node| shard_node.endpoints.get(&role))
            .cloned()
            .ok_or_else(|| {
                DomainError::NodeNotFound(format!("cells/{cell}/{keyspace}/{shard}/{role}"))
            })
    }
}
