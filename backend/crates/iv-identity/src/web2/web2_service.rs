use crate::{
    IdentityError, IdentityMetrics, IdentityResult, LoadMode, NotificationDispatcher, Web2Export,
};

use iv_config::CryptoConfig;
use iv_core::{
    AccountKey, IdentityRecord, RecoveryCipher, SelfId, SymmetricKey, TokenSource, Web2Codec,
};
use iv_store::IdentityStore;

use std::sync::Arc;

use log::{debug, info};

/// Account creation plus storage and retrieval of web2 credentials.
#[derive(Clone)]
pub struct Web2Service {
    store: IdentityStore,
    codec: Arc<dyn Web2Codec>,
    cipher: Arc<dyn RecoveryCipher>,
    tokens: Arc<dyn TokenSource>,
    notifier: NotificationDispatcher,
    symmetric_key_len: usize,
    metrics: IdentityMetrics,
}

impl Web2Service {
    pub fn new(
        store: IdentityStore,
        codec: Arc<dyn Web2Codec>,
        cipher: Arc<dyn RecoveryCipher>,
        tokens: Arc<dyn TokenSource>,
        notifier: NotificationDispatcher,
        config: &CryptoConfig,
    ) -> Self {
        Self {
            store,
            codec,
            cipher,
            tokens,
            notifier,
            symmetric_key_len: config.symmetric_key_len,
            metrics: IdentityMetrics::new(),
        }
    }

    /// Create and persist a fresh identity under `key`.
    ///
    /// Refuses to overwrite an existing account, since that would replace its
    /// symmetric key.
    pub async fn create_identity(&self, key: &AccountKey) -> IdentityResult<IdentityRecord> {
        match self.store.load(key).await {
            Ok(_) => {
                return Err(IdentityError::validation(format!(
                    "identity already exists for {key}"
                )));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let self_id = SelfId::derive(&self.tokens.next_token());
        let symmetric_key = SymmetricKey::generate(self.symmetric_key_len)?;
        let record = IdentityRecord::new(self_id, symmetric_key);

        self.store.save(key, &record).await?;
        self.metrics.identity_created();

        info!("Created identity {} for {key}", record.self_id);
        Ok(record)
    }

    pub async fn get_identity(&self, key: &AccountKey) -> IdentityResult<IdentityRecord> {
        Ok(self.store.load(key).await?)
    }

    /// Replace the account's web2 payload and tell the owner.
    ///
    /// A non-empty `recovery_id` is encrypted onto the record; otherwise the one
    /// on file (if any) is used as the notification destination. Nothing is saved
    /// when the payload fails to decode. A notification failure is reported after
    /// the save has already happened.
    pub async fn store_web2(
        &self,
        key: &AccountKey,
        recovery_id: Option<&str>,
        sealed: &str,
        peer_public_key: &str,
    ) -> IdentityResult<()> {
        let mut record = self.store.load(key).await?;

        let destination = match recovery_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                record.set_recovery_id(id, self.cipher.as_ref())?;
                Some(id.to_string())
            }
            None => record.recovery_id(self.cipher.as_ref())?,
        };

        let decoded = self.codec.decode(peer_public_key, sealed)?;
        record.replace_web2(decoded);

        self.store.save(key, &record).await?;
        self.metrics.web2_stored();
        debug!("Stored web2 payload for {key}");

        let body = format!(
            "Your idvault account {} was updated. Keep the ciphertext of your web2 private key safe: {}",
            record.self_id, record.web2.private_ciphertext
        );
        self.notifier
            .notify(destination.as_deref().unwrap_or_default(), body)
            .await
    }

    /// Seal the account's web2 payload for `peer_public_key`.
    pub async fn load_web2(
        &self,
        key: &AccountKey,
        peer_public_key: &str,
        mode: LoadMode,
    ) -> IdentityResult<Web2Export> {
        let record = match self.store.load(key).await {
            Ok(record) => record,
            Err(e) if e.is_not_found() && mode == LoadMode::Init => {
                self.create_identity(key).await?
            }
            Err(e) => return Err(e.into()),
        };

        let sealed = self.codec.encode(peer_public_key, &record.web2)?;
        Ok(Web2Export {
            self_id: record.self_id,
            sealed,
        })
    }
}
