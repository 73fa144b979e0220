use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Label for every public read call.
pub(crate) const QUERY: &str = "query";
/// Label for reads answered from cache because the upstream failed.
pub(crate) const CACHED: &str = "cached";
/// Label for upstream errors surfaced because no cached value existed.
pub(crate) const ERROR: &str = "error";

/// A named group of monotonic counters keyed by label.
pub struct Counters {
    name: String,
    counts: DashMap<&'static str, AtomicI64>,
}

impl Counters {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counts: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&self, label: &'static str, n: i64) {
        self.counts
            .entry(label)
            .or_insert_with(|| AtomicI64::new(0))
            .fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self, label: &str) -> i64 {
        self.counts
            .get(label)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> HashMap<String, i64> {
        self.counts
            .iter()
            .map(|item| (item.key().to_string(), item.value().load(Ordering::Relaxed)))
            .collect()
    }
}
