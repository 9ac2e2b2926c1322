use metrics::counter;

/// Metrics collector for identity workflows
#[derive(Clone)]
pub struct IdentityMetrics {
    prefix: &'static str,
}

impl IdentityMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "iv_identity",
        }
    }

    pub fn identity_created(&self) {
        counter!(format!("{}.identities.created", self.prefix)).increment(1);
    }

    pub fn web2_stored(&self) {
        counter!(format!("{}.web2.stored", self.prefix)).increment(1);
    }

    pub fn rebind_requested(&self) {
        counter!(format!("{}.rebinds.requested", self.prefix)).increment(1);
    }

    pub fn rebind_confirmed(&self) {
        counter!(format!("{}.rebinds.confirmed", self.prefix)).increment(1);
    }

    pub fn rebind_expired(&self) {
        counter!(format!("{}.rebinds.expired", self.prefix)).increment(1);
    }

    pub fn stale_record(&self) {
        counter!(format!("{}.rebinds.stale_old_record", self.prefix)).increment(1);
    }

    /// `outcome` is one of "sent", "failed", "timeout", "skipped"
    pub fn notification(&self, outcome: &str) {
        counter!(format!("{}.notifications.{}", self.prefix, outcome)).increment(1);
    }
}

impl Default for IdentityMetrics {
    fn default() -> Self {
        Self::new()
    }
}
