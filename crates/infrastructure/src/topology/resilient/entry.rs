use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use topograph_domain::DomainError;

use super::counters::{Counters, CACHED, ERROR};

/// Mutable fields of a cache slot. The slot lock guards them as a
/// group, so readers never observe a partial update.
struct SlotState<V> {
    /// None until the first terminal write (success or cold error).
    /// Once set it is never cleared; the slot lives for the process.
    inserted_at: Option<Instant>,
    value: Option<V>,
    last_error: Option<DomainError>,
}

/// One cached value with the locked read-through protocol shared by all
/// three topology caches.
pub(super) struct Slot<V> {
    state: Mutex<SlotState<V>>,
}

impl<V: Clone> Slot<V> {
    pub(super) fn new() -> Self {
        Self {
            state: Mutex::new(SlotState {
                inserted_at: None,
                value: None,
                last_error: None,
            }),
        }
    }

    /// Copy of the stored pair for status reporting. Holds the slot
    /// lock only long enough to clone the fields.
    pub(super) async fn peek(&self) -> (Option<V>, Option<DomainError>) {
        let state = self.state.lock().await;
        (state.value.clone(), state.last_error.clone())
    }

    /// Locked read-through.
    ///
    /// The slot lock is held across the upstream call, so concurrent
    /// readers of one key collapse into a single fetch and all observe
    /// its outcome. A fresh value short-circuits without upstream
    /// contact. On failure, a previously written slot answers with its
    /// stored pair and is left untouched (including `inserted_at`, so
    /// the next out-of-TTL reader retries); a never-written slot stores
    /// the error and serves it for the rest of the TTL window.
    pub(super) async fn read_through<F, Fut>(
        &self,
        ttl: Duration,
        counters: &Counters,
        op: &'static str,
        key: &str,
        fetch: F,
    ) -> Result<V, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, DomainError>>,
    {
        let mut state = self.state.lock().await;

        if let Some(inserted_at) = state.inserted_at {
            if inserted_at.elapsed() < ttl {
                debug!(op, key, "serving cached value");
                return stored_response(&state);
            }
        }

        match fetch().await {
            Ok(value) => {
                state.inserted_at = Some(Instant::now());
                state.value = Some(value.clone());
                state.last_error = None;
                Ok(value)
            }
            Err(err) if state.inserted_at.is_none() => {
                counters.add(ERROR, 1);
                error!(
                    op,
                    key,
                    error = %err,
                    "upstream fetch failed with no cached value, caching and returning the error"
                );
                state.inserted_at = Some(Instant::now());
                state.value = None;
                state.last_error = Some(err.clone());
                Err(err)
            }
            Err(err) => {
                counters.add(CACHED, 1);
                warn!(
                    op,
                    key,
                    error = %err,
                    "upstream fetch failed, serving last known value"
                );
                stored_response(&state)
            }
        }
    }
}

/// Maps the stored pair onto a `Result`. A successful write clears the
/// error and a cold error stores no value, so the two fields never
/// conflict; the final arm is only reachable through a logic bug and
/// stays an error rather than a panic.
fn stored_response<V: Clone>(state: &SlotState<V>) -> Result<V, DomainError> {
    match (&state.value, &state.last_error) {
        (Some(value), _) => Ok(value.clone()),
        (None, Some(err)) => Err(err.clone()),
        (None, None) => Err(DomainError::TopologyUnavailable(
            "cache entry has no value".to_string(),
        )),
    }
}
