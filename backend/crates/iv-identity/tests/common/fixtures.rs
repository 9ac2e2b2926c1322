use super::RecordingTransport;

use iv_config::{CryptoConfig, NotificationConfig, RebindConfig};
use iv_core::{AccountKey, ChaChaRecoveryCipher, UnsealedJsonCodec, UuidTokenSource};
use iv_identity::{
    EscalationQueue, NotificationDispatcher, NotificationTransport, RebindRegistry,
    RebindWorkflow, Web2Service,
};
use iv_store::{IdentityStore, MemoryBackend, RecordBackend};

use std::sync::Arc;

pub fn account(key: &str) -> AccountKey {
    AccountKey::new(key).unwrap()
}

/// Everything wired against one backend, with default config.
pub struct Harness {
    pub store: IdentityStore,
    pub web2: Web2Service,
    pub rebind: RebindWorkflow,
    pub escalations: EscalationQueue,
    pub transport: RecordingTransport,
}

pub fn harness() -> Harness {
    harness_with(Arc::new(MemoryBackend::new()))
}

pub fn harness_with(backend: Arc<dyn RecordBackend>) -> Harness {
    let transport = RecordingTransport::default();
    let store = IdentityStore::new(backend);
    let escalations = EscalationQueue::new();

    let notifier = NotificationDispatcher::new(
        Arc::new(transport.clone()) as Arc<dyn NotificationTransport>,
        &NotificationConfig::default(),
    );
    let web2 = Web2Service::new(
        store.clone(),
        Arc::new(UnsealedJsonCodec),
        Arc::new(ChaChaRecoveryCipher),
        Arc::new(UuidTokenSource),
        notifier,
        &CryptoConfig::default(),
    );
    let rebind = RebindWorkflow::new(
        store.clone(),
        RebindRegistry::new(),
        escalations.clone(),
        &RebindConfig::default(),
    );

    Harness {
        store,
        web2,
        rebind,
        escalations,
        transport,
    }
}
