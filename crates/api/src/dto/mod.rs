pub mod topology;

pub use topology::{
    CacheStatusResponse, CountersResponse, EndpointsCacheResponse, KeyspaceCacheResponse,
    NamesCacheResponse,
};
