use crate::{DeferredAction, RegistryMetrics};

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::{Instant, sleep_until};

/// Registry of pending actions keyed by string, each with its own deadline.
///
/// Cloning yields another handle to the same table.
pub struct DeferredRegistry<A: DeferredAction> {
    inner: Arc<Mutex<RegistryInner<A>>>,
    metrics: RegistryMetrics,
}

struct RegistryInner<A> {
    entries: HashMap<String, PendingEntry<A>>,
    /// Monotonic stamp per staging; also orders entries oldest-first.
    next_generation: u64,
}

struct PendingEntry<A> {
    generation: u64,
    action: A,
    deadline: Instant,
    timer: AbortHandle,
}

impl<A: DeferredAction> DeferredRegistry<A> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                entries: HashMap::new(),
                next_generation: 0,
            })),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Stage `action` under `key` for `ttl`.
    ///
    /// An entry already pending under `key` is replaced and its timer cancelled;
    /// neither of its hooks will run. Must be called within a tokio runtime.
    pub async fn stage(&self, key: impl Into<String>, action: A, ttl: Duration) {
        let key = key.into();
        let mut inner = self.inner.lock().await;

        let generation = inner.next_generation;
        inner.next_generation += 1;

        let deadline = Instant::now() + ttl;
        let timer = tokio::spawn(Self::expire_at(
            Arc::downgrade(&self.inner),
            self.metrics.clone(),
            key.clone(),
            generation,
            deadline,
        ))
        .abort_handle();

        let entry = PendingEntry {
            generation,
            action,
            deadline,
            timer,
        };

        if let Some(previous) = inner.entries.insert(key.clone(), entry) {
            previous.timer.abort();
            self.metrics.replaced();
            warn!("Replaced pending entry {key} before it resolved");
        }

        self.metrics.staged(inner.entries.len());
        debug!(
            "Staged {key} for {:?} ({} pending)",
            ttl,
            inner.entries.len()
        );
    }

    /// Resolve the oldest entry whose key `matcher` accepts.
    ///
    /// `matcher` returns the key suffix handed to the continuation, or `None` to
    /// skip the key. Only one entry is resolved per call. Returns false, with no
    /// side effects, when nothing matches.
    pub async fn complete<M>(&self, matcher: M) -> bool
    where
        M: for<'k> Fn(&'k str) -> Option<&'k str>,
    {
        let claimed = {
            let mut inner = self.inner.lock().await;

            let oldest = inner
                .entries
                .iter()
                .filter_map(|(key, entry)| {
                    matcher(key.as_str()).map(|suffix| (entry.generation, key.clone(), suffix.to_string()))
                })
                .min_by_key(|(generation, _, _)| *generation);

            match oldest {
                Some((_, key, suffix)) => inner
                    .entries
                    .remove(&key)
                    .map(|entry| (key, suffix, entry, inner.entries.len())),
                None => None,
            }
        };

        let Some((key, suffix, entry, pending)) = claimed else {
            return false;
        };

        self.run_continuation(key, suffix, entry, pending).await;
        true
    }

    /// Resolve the entries whose key starts with `prefix`, oldest first, one per call.
    pub async fn complete_prefix(&self, prefix: &str) -> bool {
        self.complete(|key| key.strip_prefix(prefix)).await
    }

    /// Resolve exactly the entry under `prefix + suffix`, without scanning.
    pub async fn complete_exact(&self, prefix: &str, suffix: &str) -> bool {
        let key = format!("{prefix}{suffix}");

        let claimed = {
            let mut inner = self.inner.lock().await;
            inner
                .entries
                .remove(&key)
                .map(|entry| (entry, inner.entries.len()))
        };

        let Some((entry, pending)) = claimed else {
            return false;
        };

        self.run_continuation(key, suffix.to_string(), entry, pending)
            .await;
        true
    }

    pub async fn is_pending(&self, key: &str) -> bool {
        self.inner.lock().await.entries.contains_key(key)
    }

    /// Time left before `key` expires, if it is pending.
    pub async fn remaining(&self, key: &str) -> Option<Duration> {
        let inner = self.inner.lock().await;
        inner
            .entries
            .get(key)
            .map(|entry| entry.deadline.saturating_duration_since(Instant::now()))
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.entries.is_empty()
    }

    /// Cancel every timer and drop every pending entry without running either hook.
    ///
    /// Returns the number of entries discarded.
    pub async fn shutdown(&self) -> usize {
        let drained: Vec<(String, PendingEntry<A>)> = {
            let mut inner = self.inner.lock().await;
            inner.entries.drain().collect()
        };

        for (key, entry) in &drained {
            entry.timer.abort();
            warn!("Discarding unresolved pending entry {key} at shutdown");
        }

        if !drained.is_empty() {
            self.metrics.discarded(drained.len());
        }
        drained.len()
    }

    /// Runs the continuation on its own task; a caller dropped mid-await does
    /// not cancel it.
    async fn run_continuation(
        &self,
        key: String,
        suffix: String,
        entry: PendingEntry<A>,
        pending: usize,
    ) {
        entry.timer.abort();

        let action = entry.action;
        let metrics = self.metrics.clone();
        let task_key = key.clone();
        let task = tokio::spawn(async move {
            match action.complete(&suffix).await {
                Ok(()) => {
                    info!("Completed pending entry {task_key}");
                    metrics.completed(pending, true);
                }
                Err(e) => {
                    error!("Continuation for {task_key} failed, discarding: {e}");
                    metrics.completed(pending, false);
                }
            }
        });

        if let Err(e) = task.await {
            error!("Continuation task for {key} did not finish: {e}");
            self.metrics.completed(pending, false);
        }
    }

    async fn expire_at(
        inner: Weak<Mutex<RegistryInner<A>>>,
        metrics: RegistryMetrics,
        key: String,
        generation: u64,
        deadline: Instant,
    ) {
        sleep_until(deadline).await;

        let Some(inner) = inner.upgrade() else {
            return;
        };

        let claimed = {
            let mut guard = inner.lock().await;
            let current = guard
                .entries
                .get(&key)
                .is_some_and(|entry| entry.generation == generation);
            if current {
                guard
                    .entries
                    .remove(&key)
                    .map(|entry| (entry, guard.entries.len()))
            } else {
                None
            }
        };

        // Completed or replaced while this timer was waking up.
        let Some((entry, pending)) = claimed else {
            return;
        };

        let verdict = entry.action.expire(&key);
        warn!("Pending entry {key} expired unresolved (verdict: {verdict})");
        metrics.expired(pending, verdict);
    }
}

impl<A> Drop for RegistryInner<A> {
    fn drop(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        for (key, entry) in &self.entries {
            entry.timer.abort();
            warn!("Registry dropped with {key} still pending; discarding it unresolved");
        }
        RegistryMetrics::new().discarded(self.entries.len());
    }
}

impl<A: DeferredAction> Default for DeferredRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: DeferredAction> Clone for DeferredRegistry<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            metrics: self.metrics.clone(),
        }
    }
}
