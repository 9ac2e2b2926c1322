use crate::{CoreResult, RecoveryCipher, SelfId, SymmetricKey, Web2Payload};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted shape of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub self_id: SelfId,
    symmetric_key: SymmetricKey,
    /// Hex of the recovery id encrypted under `symmetric_key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recovery_ciphertext: Option<String>,
    pub web2: Web2Payload,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityRecord {
    pub fn new(self_id: SelfId, symmetric_key: SymmetricKey) -> Self {
        let now = Utc::now();
        Self {
            self_id,
            web2: Web2Payload {
                symmetric_key: Some(symmetric_key.clone()),
                ..Web2Payload::default()
            },
            symmetric_key,
            recovery_ciphertext: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn symmetric_key(&self) -> &SymmetricKey {
        &self.symmetric_key
    }

    pub fn has_recovery_id(&self) -> bool {
        self.recovery_ciphertext.is_some()
    }

    /// Encrypts and stores the recovery contact. The plaintext is not kept.
    pub fn set_recovery_id(
        &mut self,
        recovery_id: &str,
        cipher: &dyn RecoveryCipher,
    ) -> CoreResult<()> {
        let sealed = cipher.encrypt(recovery_id.as_bytes(), &self.symmetric_key)?;
        self.recovery_ciphertext = Some(hex::encode(sealed));
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Decrypts the stored recovery contact, if one is on file.
    pub fn recovery_id(&self, cipher: &dyn RecoveryCipher) -> CoreResult<Option<String>> {
        let Some(ref encoded) = self.recovery_ciphertext else {
            return Ok(None);
        };
        let sealed = hex::decode(encoded)?;
        let plain = cipher.decrypt(&sealed, &self.symmetric_key)?;
        String::from_utf8(plain)
            .map(Some)
            .map_err(|e| crate::CoreError::cipher(format!("recovery id is not utf-8: {e}")))
    }

    /// Swaps in a freshly decoded payload, re-attaching this record's symmetric key.
    pub fn replace_web2(&mut self, mut decoded: Web2Payload) {
        decoded.symmetric_key = Some(self.symmetric_key.clone());
        self.web2 = decoded;
        self.updated_at = Utc::now();
    }
}
