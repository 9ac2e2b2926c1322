use iv_core::CoreError;
use iv_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity not found: {key} {location}")]
    NotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Codec error: {source} {location}")]
    Codec {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Cipher error: {source} {location}")]
    Cipher {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Only ever observed by expiry handling; never returned to a caller.
    #[error("Deferred operation {key} timed out after {window_secs}s {location}")]
    TimedOut {
        key: String,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Notification transport failed: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Notification to {destination} not confirmed within {timeout_secs}s {location}")]
    NotificationTimeout {
        destination: String,
        timeout_secs: u64,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timed_out(key: impl Into<String>, window_secs: u64) -> Self {
        Self::TimedOut {
            key: key.into(),
            window_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn notification_timeout(destination: impl Into<String>, timeout_secs: u64) -> Self {
        Self::NotificationTimeout {
            destination: destination.into(),
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for IdentityError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            StoreError::NotFound { key, .. } => Self::NotFound { key, location },
            other => Self::Store {
                source: other,
                location,
            },
        }
    }
}

impl From<CoreError> for IdentityError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            CoreError::Validation { message, .. } => Self::Validation { message, location },
            CoreError::Codec { .. } => Self::Codec { source, location },
            other => Self::Cipher {
                source: other,
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
