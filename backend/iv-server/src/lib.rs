pub mod error;
pub mod escalation_reporter;
pub mod identity_app;
pub mod logger;
pub mod shutdown_coordinator;


pub use error::{Result as ServerResult, ServerError};
pub use escalation_reporter::{ESCALATION_REPORT_INTERVAL, spawn_escalation_reporter};
pub use identity_app::{IdentityApp, ShutdownReport};
pub use shutdown_coordinator::ShutdownCoordinator;
