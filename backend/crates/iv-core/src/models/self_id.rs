use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const SELF_ID_BYTES: usize = 16;

/// Publicly shareable account identifier, fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelfId(String);

impl SelfId {
    /// Derives the identifier from a unique token. Same token, same id.
    pub fn derive(token: &str) -> Self {
        let digest = Sha256::digest(token.as_bytes());
        Self(hex::encode(&digest[..SELF_ID_BYTES]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
