pub mod mock_topology;
