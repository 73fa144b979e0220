//! Health label vocabulary published by the topology directory.
//!
//! Endpoints carry a free-form map from health dimension to level; the
//! serving path only interprets the replication-lag dimension.

/// Health dimension reporting how far a replica trails its primary.
pub const REPLICATION_LAG: &str = "replication_lag";

/// Level meaning the replica is too far behind to serve fresh reads.
pub const REPLICATION_LAG_HIGH: &str = "high";
