use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_SYMMETRIC_KEY_LEN: usize = 16;
pub const MAX_SYMMETRIC_KEY_LEN: usize = 64;
pub const DEFAULT_SYMMETRIC_KEY_LEN: usize = 32;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// Length in bytes of each new account's symmetric key
    pub symmetric_key_len: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            symmetric_key_len: DEFAULT_SYMMETRIC_KEY_LEN,
        }
    }
}

impl CryptoConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.symmetric_key_len < MIN_SYMMETRIC_KEY_LEN
            || self.symmetric_key_len > MAX_SYMMETRIC_KEY_LEN
        {
            return Err(ConfigError::crypto(format!(
                "crypto.symmetric_key_len must be {}-{}, got {}",
                MIN_SYMMETRIC_KEY_LEN, MAX_SYMMETRIC_KEY_LEN, self.symmetric_key_len
            )));
        }

        Ok(())
    }
}
