pub mod fixtures;
pub mod transports;

pub use fixtures::{Harness, account, harness, harness_with};
pub use transports::{FailingTransport, HangingTransport, RecordingTransport};
