use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Rebind window constraints
pub const MIN_WINDOW_SECS: u64 = 1;
pub const MAX_WINDOW_SECS: u64 = 86_400;
pub const DEFAULT_WINDOW_SECS: u64 = 300;

pub const DEFAULT_NAMESPACE: &str = "rebind:";

/// Deferred rebind settings.
///
/// A staged wallet change waits `window_secs` for the owner's next login before
/// it is discarded and escalated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RebindConfig {
    /// Seconds a staged rebind waits for login confirmation
    pub window_secs: u64,
    /// Registry key prefix for pending rebinds
    pub namespace: String,
}

impl Default for RebindConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            namespace: String::from(DEFAULT_NAMESPACE),
        }
    }
}

impl RebindConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.window_secs < MIN_WINDOW_SECS || self.window_secs > MAX_WINDOW_SECS {
            return Err(ConfigError::rebind(format!(
                "rebind.window_secs must be {}-{}, got {}",
                MIN_WINDOW_SECS, MAX_WINDOW_SECS, self.window_secs
            )));
        }

        if self.namespace.is_empty() {
            return Err(ConfigError::rebind("rebind.namespace cannot be empty"));
        }

        Ok(())
    }
}
