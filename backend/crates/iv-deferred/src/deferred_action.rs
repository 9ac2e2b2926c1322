use crate::ExpiryVerdict;

use std::fmt::Display;

use async_trait::async_trait;

/// A unit of deferred work plus its captured state.
///
/// Exactly one of [`complete`](Self::complete) or [`expire`](Self::expire) is
/// called per staged action, outside the registry lock. `complete` runs on its
/// own spawned task.
/// Both should return quickly or hand off to background work.
#[async_trait]
pub trait DeferredAction: Send + 'static {
    type Error: Display + Send + 'static;

    /// Continuation. `key_suffix` is the part of the key after the matched prefix.
    async fn complete(self, key_suffix: &str) -> Result<(), Self::Error>;

    /// Expiry handler, called with the full key once the deadline passes.
    fn expire(self, key: &str) -> ExpiryVerdict;
}
