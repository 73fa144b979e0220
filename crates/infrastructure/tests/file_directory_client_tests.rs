use std::io::Write;

use tempfile::NamedTempFile;
use topograph_application::TopologyClient;
use topograph_domain::{DomainError, ServerRole};
use topograph_infrastructure::topology::FileDirectoryClient;

const SNAPSHOT: &str = r#"{
  "cells": {
    "zone1": {
      "keyspaces": {
        "commerce": {
          "serving": {
            "partitions": {
              "replica": { "shards": ["-80", "80-"] }
            },
            "served_roles": ["primary", "replica"],
            "sharding_column_name": "customer_id",
            "sharding_column_type": "uint64"
          },
          "shards": {
            "-80": {
              "endpoints": {
                "replica": [
                  { "uid": 101, "host": "db-101.zone1", "port_map": { "grpc": 15999 } },
                  {
                    "uid": 102,
                    "host": "db-102.zone1",
                    "health": { "replication_lag": "high" }
                  }
                ]
              }
            }
          }
        },
        "billing": { "serving": {} }
      }
    }
  }
}"#;

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_keyspace_names_are_sorted() {
    let file = snapshot_file();
    let client = FileDirectoryClient::new(file.path());

    let names = client.keyspace_names("zone1").await.unwrap();
    assert_eq!(names, vec!["billing", "commerce"]);
}

#[tokio::test]
async fn test_keyspace_metadata_is_parsed() {
    let file = snapshot_file();
    let client = FileDirectoryClient::new(file.path());

    let keyspace = client.keyspace("zone1", "commerce").await.unwrap();
    assert_eq!(keyspace.sharding_column_name.as_deref(), Some("customer_id"));
    assert_eq!(keyspace.served_roles, vec![ServerRole::Primary, ServerRole::Replica]);
    assert_eq!(
        keyspace.partitions[&ServerRole::Replica].shards,
        vec!["-80", "80-"]
    );
}

#[tokio::test]
async fn test_endpoints_carry_health_labels() {
    let file = snapshot_file();
    let client = FileDirectoryClient::new(file.path());

    let endpoints = client
        .endpoints("zone1", "commerce", "-80", ServerRole::Replica)
        .await
        .unwrap();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].uid, 101);
    assert_eq!(endpoints[0].port_map.get("grpc"), Some(&15999));
    assert!(!endpoints[0].has_high_replication_lag());
    assert!(endpoints[1].has_high_replication_lag());
}

#[tokio::test]
async fn test_missing_nodes_map_to_node_not_found() {
    let file = snapshot_file();
    let client = FileDirectoryClient::new(file.path());

    let err = client.keyspace_names("zone9").await.unwrap_err();
    assert_eq!(err, DomainError::NodeNotFound("cells/zone9".to_string()));

    let err = client.keyspace("zone1", "inventory").await.unwrap_err();
    assert_eq!(
        err,
        DomainError::NodeNotFound("cells/zone1/inventory".to_string())
    );

    let err = client
        .endpoints("zone1", "commerce", "-80", ServerRole::BatchRead)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::NodeNotFound("cells/zone1/commerce/-80/batch_read".to_string())
    );
}

#[tokio::test]
async fn test_malformed_snapshot_is_invalid_topology_data() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();
    let client = FileDirectoryClient::new(file.path());

    let err = client.keyspace_names("zone1").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidTopologyData(_)));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let client = FileDirectoryClient::new("/nonexistent/directory.json");

    let err = client.keyspace_names("zone1").await.unwrap_err();
    assert!(matches!(err, DomainError::IoError(_)));
}
