//! Time-bounded pending-action registry.
//!
//! Each staged entry resolves exactly once: either a completion call finds it
//! and runs its continuation, or its timer elapses and its expiry handler runs.
//! Whichever path removes the entry from the table first wins.

pub mod deferred_action;
pub mod deferred_registry;
pub mod expiry_verdict;
pub mod registry_metrics;


pub use deferred_action::DeferredAction;
pub use deferred_registry::DeferredRegistry;
pub use expiry_verdict::ExpiryVerdict;
pub use registry_metrics::RegistryMetrics;
