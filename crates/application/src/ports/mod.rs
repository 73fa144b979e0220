pub mod topology_client;

pub use topology_client::TopologyClient;
