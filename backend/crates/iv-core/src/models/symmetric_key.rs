use crate::{CoreError, CoreResult};

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Per-account secret protecting the recovery identifier.
///
/// Generated once when the account is created and never regenerated: anything
/// encrypted under it becomes unreadable if it changes. Serialized as hex.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey(Vec<u8>);

impl SymmetricKey {
    /// Generates a random key of `len` bytes.
    #[track_caller]
    pub fn generate(len: usize) -> CoreResult<Self> {
        if len == 0 {
            return Err(CoreError::validation("symmetric key length must be non-zero"));
        }
        let mut bytes = vec![0u8; len];
        rand::rng().fill(bytes.as_mut_slice());
        Ok(Self(bytes))
    }

    #[track_caller]
    pub fn from_bytes(bytes: Vec<u8>) -> CoreResult<Self> {
        if bytes.is_empty() {
            return Err(CoreError::validation("symmetric key cannot be empty"));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.0.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for SymmetricKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for SymmetricKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = hex::decode(&encoded).map_err(serde::de::Error::custom)?;
        Self::from_bytes(bytes).map_err(serde::de::Error::custom)
    }
}
