use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cipher error: {message} {location}")]
    Cipher {
        message: String,
        location: ErrorLocation,
    },

    #[error("Codec error: {message} {location}")]
    Codec {
        message: String,
        location: ErrorLocation,
    },

    #[error("Hex decode error: {source} {location}")]
    Hex {
        #[source]
        source: hex::FromHexError,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cipher(message: impl Into<String>) -> Self {
        Self::Cipher {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<hex::FromHexError> for CoreError {
    #[track_caller]
    fn from(source: hex::FromHexError) -> Self {
        Self::Hex {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
