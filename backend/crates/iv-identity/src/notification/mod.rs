pub mod email;
pub mod log_transport;
pub mod notification_dispatcher;
pub mod notification_transport;
