//! Resilient read-through cache over a topology directory.
//!
//! Three keyed caches (keyspace names, keyspace metadata, endpoints)
//! share one locked read-through protocol: concurrent requests for the
//! same key collapse into a single upstream fetch, and upstream
//! failures are masked by the last known good value.

mod counters;
mod entry;
mod server;
mod status;

pub use counters::Counters;
pub use server::ResilientTopology;
pub use status::{
    EndpointsCacheStatus, KeyspaceCacheStatus, NamesCacheStatus, TopologyCacheStatus,
};
