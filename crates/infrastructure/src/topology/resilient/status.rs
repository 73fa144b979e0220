use topograph_domain::{DomainError, Endpoint, ServerRole, ServingKeyspace};

use super::server::ResilientTopology;

/// Point-in-time copy of one keyspace-names cache entry.
#[derive(Debug, Clone)]
pub struct NamesCacheStatus {
    pub cell: String,
    pub value: Option<Vec<String>>,
    pub last_error: Option<DomainError>,
}

impl NamesCacheStatus {
    pub fn key(&self) -> String {
        self.cell.clone()
    }
}

/// Point-in-time copy of one keyspace cache entry.
#[derive(Debug, Clone)]
pub struct KeyspaceCacheStatus {
    pub cell: String,
    pub keyspace: String,
    pub value: Option<ServingKeyspace>,
    pub last_error: Option<DomainError>,
}

impl KeyspaceCacheStatus {
    pub fn key(&self) -> String {
        format!("{}.{}", self.cell, self.keyspace)
    }

    /// HTML fragment for the status page. Output strings are part of
    /// the page's external contract.
    pub fn status_html(&self) -> String {
        let Some(value) = &self.value else {
            return "No Data".to_string();
        };

        let mut out = String::from("<b>Partitions:</b><br>");
        let mut partitions: Vec<_> = value.partitions.iter().collect();
        partitions.sort_by_key(|(role, _)| role.as_str());
        for (role, partition) in partitions {
            out.push_str("&nbsp;<b>");
            out.push_str(role.as_str());
            out.push_str("</b>");
            for shard in &partition.shards {
                out.push_str("&nbsp;");
                out.push_str(shard);
            }
            out.push_str("<br>");
        }

        out.push_str("<b>ServedRoles:</b>");
        for role in &value.served_roles {
            out.push_str("&nbsp;");
            out.push_str(role.as_str());
        }
        out.push_str("<br>");

        if let Some(column_name) = &value.sharding_column_name {
            out.push_str("<b>ShardingColumnName:</b>&nbsp;");
            out.push_str(column_name);
            out.push_str("<br>");
            if let Some(column_type) = &value.sharding_column_type {
                out.push_str("<b>ShardingColumnType:</b>&nbsp;");
                out.push_str(&column_type.to_string());
                out.push_str("<br>");
            }
        }

        if !value.served_from.is_empty() {
            out.push_str("<b>ServedFrom:</b><br>");
            let mut served_from: Vec<_> = value.served_from.iter().collect();
            served_from.sort_by_key(|(role, _)| role.as_str());
            for (role, keyspace) in served_from {
                out.push_str("&nbsp;<b>");
                out.push_str(role.as_str());
                out.push_str("</b>&nbsp;");
                out.push_str(keyspace);
                out.push_str("<br>");
            }
        }

        out
    }
}

/// Point-in-time copy of one endpoints cache entry.
#[derive(Debug, Clone)]
pub struct EndpointsCacheStatus {
    pub cell: String,
    pub keyspace: String,
    pub shard: String,
    pub role: ServerRole,
    /// Served (filtered) list.
    pub value: Option<Vec<Endpoint>>,
    /// Unfiltered list from the directory.
    pub original_value: Option<Vec<Endpoint>>,
    pub last_error: Option<DomainError>,
}

impl EndpointsCacheStatus {
    pub fn key(&self) -> String {
        format!("{}.{}.{}.{}", self.cell, self.keyspace, self.shard, self.role)
    }

    /// HTML fragment for the status page. Output strings are part of
    /// the page's external contract.
    pub fn status_html(&self) -> String {
        let original_len = self.original_value.as_ref().map_or(0, Vec::len);
        let serving_len = self.value.as_ref().map_or(0, Vec::len);
        if original_len == serving_len {
            if serving_len == 0 {
                return "<b>No entries</b>".to_string();
            }
            let first_has_labels = self
                .original_value
                .as_ref()
                .and_then(|endpoints| endpoints.first())
                .is_some_and(|ep| !ep.health.is_empty());
            if first_has_labels {
                return format!("<b>All {serving_len} values are unhappy</b>");
            }
            return format!("{serving_len} values are happy");
        }
        format!("{serving_len} out of {original_len} values are happy")
    }
}

/// Displayable snapshot of all three caches, sorted by composite key.
#[derive(Debug, Clone, Default)]
pub struct TopologyCacheStatus {
    pub names: Vec<NamesCacheStatus>,
    pub keyspaces: Vec<KeyspaceCacheStatus>,
    pub endpoints: Vec<EndpointsCacheStatus>,
}

impl ResilientTopology {
    /// Walks the caches and copies every entry. Each entry is copied
    /// under its own lock, one at a time, so in-flight fetches are only
    /// delayed by the copy itself; sorting happens after all locks are
    /// released. Entries mid-refresh appear with whichever state their
    /// copy observed.
    pub async fn cache_status(&self) -> TopologyCacheStatus {
        let mut result = TopologyCacheStatus::default();

        {
            let caches = self.caches.lock().await;

            for entry in caches.names.values() {
                let (value, last_error) = entry.slot.peek().await;
                result.names.push(NamesCacheStatus {
                    cell: entry.cell.clone(),
                    value,
                    last_error,
                });
            }

            for entry in caches.keyspaces.values() {
                let (value, last_error) = entry.slot.peek().await;
                result.keyspaces.push(KeyspaceCacheStatus {
                    cell: entry.cell.clone(),
                    keyspace: entry.keyspace.clone(),
                    value,
                    last_error,
                });
            }

            for entry in caches.endpoints.values() {
                let (value, last_error) = entry.slot.peek().await;
                let (value, original_value) = match value {
                    Some(v) => (Some(v.serving), Some(v.upstream)),
                    None => (None, None),
                };
                result.endpoints.push(EndpointsCacheStatus {
                    cell: entry.cell.clone(),
                    keyspace: entry.keyspace.clone(),
                    shard: entry.shard.clone(),
                    role: entry.role,
                    value,
                    original_value,
                    last_error,
                });
            }
        }

        result.names.sort_by(|a, b| a.cell.cmp(&b.cell));
        result.keyspaces.sort_by_key(KeyspaceCacheStatus::key);
        result.endpoints.sort_by_key(EndpointsCacheStatus::key);
        result
    }
}
