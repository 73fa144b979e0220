pub mod directory;
pub mod health_filter;
pub mod resilient;

pub use directory::FileDirectoryClient;
pub use health_filter::filter_lagged;
pub use resilient::{
    Counters, EndpointsCacheStatus, KeyspaceCacheStatus, NamesCacheStatus, ResilientTopology,
    TopologyCacheStatus,
};
