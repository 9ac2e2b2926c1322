pub mod error;
pub mod escalation;
pub mod metrics;
pub mod notification;
pub mod rebind;
pub mod web2;


pub use error::{IdentityError, Result as IdentityResult};
pub use escalation::{DEFAULT_ESCALATION_CAPACITY, Escalation, EscalationQueue, EscalationReason};
pub use metrics::IdentityMetrics;
pub use notification::email::Email;
pub use notification::log_transport::LogTransport;
pub use notification::notification_dispatcher::NotificationDispatcher;
pub use notification::notification_transport::NotificationTransport;
pub use rebind::pending_rebind::PendingRebind;
pub use rebind::rebind_workflow::RebindWorkflow;
pub use web2::load_mode::LoadMode;
pub use web2::web2_export::Web2Export;
pub use web2::web2_service::Web2Service;

/// Registry specialised to pending rebinds.
pub type RebindRegistry = iv_deferred::DeferredRegistry<PendingRebind>;
