use crate::ExpiryVerdict;

use metrics::{counter, gauge};

/// Metrics collector for registry resolutions
#[derive(Clone)]
pub struct RegistryMetrics {
    prefix: &'static str,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "iv_deferred",
        }
    }

    pub fn staged(&self, pending: usize) {
        counter!(format!("{}.entries.staged", self.prefix)).increment(1);
        gauge!(format!("{}.entries.pending", self.prefix)).set(pending as f64);
    }

    pub fn replaced(&self) {
        counter!(format!("{}.entries.replaced", self.prefix)).increment(1);
    }

    pub fn completed(&self, pending: usize, succeeded: bool) {
        counter!(format!("{}.entries.completed", self.prefix)).increment(1);
        if !succeeded {
            counter!(format!("{}.continuations.failed", self.prefix)).increment(1);
        }
        gauge!(format!("{}.entries.pending", self.prefix)).set(pending as f64);
    }

    pub fn expired(&self, pending: usize, verdict: ExpiryVerdict) {
        counter!(format!("{}.entries.expired", self.prefix)).increment(1);
        counter!(format!("{}.entries.expired.{}", self.prefix, verdict)).increment(1);
        gauge!(format!("{}.entries.pending", self.prefix)).set(pending as f64);
    }

    pub fn discarded(&self, count: usize) {
        counter!(format!("{}.entries.discarded", self.prefix)).increment(count as u64);
        gauge!(format!("{}.entries.pending", self.prefix)).set(0.0);
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
