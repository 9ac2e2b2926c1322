use iv_core::AccountKey;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use log::warn;

/// Escalations held before the oldest are dropped.
pub const DEFAULT_ESCALATION_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationReason {
    /// The owner never confirmed the rebind by logging in.
    RebindExpired,
    /// The new record was written but the old one could not be removed.
    StaleOldRecord,
}

/// An unresolved rebind that needs an operator.
#[derive(Debug, Clone)]
pub struct Escalation {
    pub reason: EscalationReason,
    pub old_key: AccountKey,
    pub new_key: AccountKey,
    pub detail: String,
    pub raised_at: DateTime<Utc>,
}

/// Bounded shared list of escalations awaiting manual review.
///
/// Appended to from expiry handlers, which run synchronously, hence the std mutex.
/// Once `capacity` is reached the oldest entry is dropped (and logged) to make room.
#[derive(Clone)]
pub struct EscalationQueue {
    inner: Arc<Mutex<VecDeque<Escalation>>>,
    capacity: usize,
}

impl EscalationQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ESCALATION_CAPACITY)
    }

    /// `capacity` of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    pub fn raise(
        &self,
        reason: EscalationReason,
        old_key: &AccountKey,
        new_key: &AccountKey,
        detail: impl Into<String>,
    ) {
        let escalation = Escalation {
            reason,
            old_key: old_key.clone(),
            new_key: new_key.clone(),
            detail: detail.into(),
            raised_at: Utc::now(),
        };

        let mut queue = self.lock();
        while queue.len() >= self.capacity {
            let Some(dropped) = queue.pop_front() else {
                break;
            };
            warn!(
                "Escalation queue full ({}), dropping oldest ({:?}) {} -> {}: {}",
                self.capacity, dropped.reason, dropped.old_key, dropped.new_key, dropped.detail
            );
        }
        queue.push_back(escalation);
    }

    /// Oldest first, without removing anything.
    pub fn snapshot(&self) -> Vec<Escalation> {
        self.lock().iter().cloned().collect()
    }

    /// Remove and return everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Escalation> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Escalation>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EscalationQueue {
    fn default() -> Self {
        Self::new()
    }
}
