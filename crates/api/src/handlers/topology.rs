use crate::{
    dto::{CacheStatusResponse, CountersResponse},
    state::AppState,
};
use axum::{extract::State, response::Html, Json};
use std::collections::HashMap;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_status")]
pub async fn get_cache_status(State(state): State<AppState>) -> Json<CacheStatusResponse> {
    debug!("Fetching topology cache status");

    let status = state.topology.cache_status().await;
    debug!(
        names = status.names.len(),
        keyspaces = status.keyspaces.len(),
        endpoints = status.endpoints.len(),
        "Topology cache status collected"
    );

    Json(CacheStatusResponse::from(status))
}

#[instrument(skip(state), name = "api_get_counters")]
pub async fn get_counters(State(state): State<AppState>) -> Json<CountersResponse> {
    let counters = state.topology.counters();
    Json(CountersResponse {
        name: counters.name().to_string(),
        counts: counters.snapshot(),
    })
}

#[instrument(skip(state), name = "api_get_healthy_endpoints")]
pub async fn get_healthy_endpoints(State(state): State<AppState>) -> Json<HashMap<String, i64>> {
    Json(state.topology.healthy_endpoint_count().await)
}

#[instrument(skip(state), name = "api_get_degraded_endpoints")]
pub async fn get_degraded_endpoints(State(state): State<AppState>) -> Json<HashMap<String, i64>> {
    Json(state.topology.degraded_endpoint_count().await)
}

/// Human-readable status page assembled from the cache snapshot.
#[instrument(skip(state), name = "api_status_page")]
pub async fn status_page(State(state): State<AppState>) -> Html<String> {
    let status = state.topology.cache_status().await;
    let counters = state.topology.counters();

    let mut page = String::from(
        "<!DOCTYPE html>\n<html><head><title>topograph cache status</title></head><body>\n\
         <h1>Topology Cache</h1>\n",
    );

    page.push_str("<h2>Counters</h2>\n<table border=\"1\">\n<tr><th>Label</th><th>Count</th></tr>\n");
    let mut counts: Vec<_> = counters.snapshot().into_iter().collect();
    counts.sort();
    for (label, count) in counts {
        page.push_str(&format!("<tr><td>{label}</td><td>{count}</td></tr>\n"));
    }
    page.push_str("</table>\n");

    page.push_str(
        "<h2>Keyspace Names</h2>\n<table border=\"1\">\n\
         <tr><th>Cell</th><th>Value</th><th>LastError</th></tr>\n",
    );
    for entry in &status.names {
        let value = entry
            .value
            .as_ref()
            .map_or(String::new(), |names| names.join("&nbsp;"));
        let last_error = entry
            .last_error
            .as_ref()
            .map_or(String::new(), |e| e.to_string());
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            entry.cell, value, last_error
        ));
    }
    page.push_str("</table>\n");

    page.push_str(
        "<h2>Keyspaces</h2>\n<table border=\"1\">\n\
         <tr><th>Cell</th><th>Keyspace</th><th>Status</th><th>LastError</th></tr>\n",
    );
    for entry in &status.keyspaces {
        let last_error = entry
            .last_error
            .as_ref()
            .map_or(String::new(), |e| e.to_string());
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            entry.cell,
            entry.keyspace,
            entry.status_html(),
            last_error
        ));
    }
    page.push_str("</table>\n");

    page.push_str(
        "<h2>Endpoints</h2>\n<table border=\"1\">\n\
         <tr><th>Cell</th><th>Keyspace</th><th>Shard</th><th>Role</th><th>Status</th><th>LastError</th></tr>\n",
    );
    for entry in &status.endpoints {
        let last_error = entry
            .last_error
            .as_ref()
            .map_or(String::new(), |e| e.to_string());
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            entry.cell,
            entry.keyspace,
            entry.shard,
            entry.role,
            entry.status_html(),
            last_error
        ));
    }
    page.push_str("</table>\n</body></html>\n");

    Html(page)
}
