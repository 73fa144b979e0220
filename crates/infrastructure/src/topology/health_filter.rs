use topograph_domain::Endpoint;

/// Drops endpoints reporting high replication lag, preserving order.
///
/// Fail-open rule: if every endpoint in a non-empty list is lagging,
/// the input is returned unchanged. Routing to degraded replicas beats
/// routing to nothing; the status page surfaces the condition through
/// the degraded count.
pub fn filter_lagged(endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
    if endpoints.is_empty() {
        return endpoints;
    }

    let healthy = endpoints
        .iter()
        .filter(|ep| !ep.has_high_replication_lag())
        .count();
    // nothing to drop, or fail-open
    if healthy == endpoints.len() || healthy == 0 {
        return endpoints;
    }

    endpoints
        .into_iter()
        .filter(|ep| !ep.has_high_replication_lag())
        .collect()
}
