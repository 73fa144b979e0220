use async_trait::async_trait;
use topograph_domain::{DomainError, Endpoint, ServerRole, ServingKeyspace};

/// Read-only view of the serving graph in a topology directory.
///
/// This is the subset of the directory API that query routers need to
/// resolve serving addresses. Implementations talk to the real
/// directory; the resilient cache implements it too, so callers cannot
/// tell a cached front-end from the directory itself.
#[async_trait]
pub trait TopologyClient: Send + Sync {
    /// Keyspaces served in a cell. Order and duplicates are whatever
    /// the directory published.
    async fn keyspace_names(&self, cell: &str) -> Result<Vec<String>, DomainError>;

    /// Serving metadata for one keyspace in one cell.
    async fn keyspace(&self, cell: &str, keyspace: &str) -> Result<ServingKeyspace, DomainError>;

    /// Endpoints serving one (cell, keyspace, shard, role) tuple.
    async fn endpoints(
        &self,
        cell: &str,
        keyspace: &str,
        shard: &str,
        role: ServerRole,
    ) -> Result<Vec<Endpoint>, DomainError>;
}
