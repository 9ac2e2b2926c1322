use iv_config::Config;
use iv_core::{ChaChaRecoveryCipher, UnsealedJsonCodec, UuidTokenSource, Web2Codec};
use iv_identity::{
    Escalation, EscalationQueue, LogTransport, NotificationDispatcher, NotificationTransport,
    RebindRegistry, RebindWorkflow, Web2Service,
};
use iv_store::{IdentityStore, RecordBackend};

use std::sync::Arc;

use log::{info, warn};

/// The wired service graph: one store, one rebind registry, both services.
#[derive(Clone)]
pub struct IdentityApp {
    pub web2: Web2Service,
    pub rebind: RebindWorkflow,
    escalations: EscalationQueue,
}

/// What was left unresolved when the app stopped.
#[derive(Debug)]
pub struct ShutdownReport {
    pub discarded_rebinds: usize,
    pub escalations: Vec<Escalation>,
}

impl IdentityApp {
    pub fn new(
        config: &Config,
        backend: Arc<dyn RecordBackend>,
        codec: Arc<dyn Web2Codec>,
        transport: Arc<dyn NotificationTransport>,
    ) -> Self {
        let store = IdentityStore::new(backend);
        let escalations = EscalationQueue::new();

        let notifier = NotificationDispatcher::new(transport, &config.notification);
        let web2 = Web2Service::new(
            store.clone(),
            codec,
            Arc::new(ChaChaRecoveryCipher),
            Arc::new(UuidTokenSource),
            notifier,
            &config.crypto,
        );
        let rebind = RebindWorkflow::new(
            store,
            RebindRegistry::new(),
            escalations.clone(),
            &config.rebind,
        );

        Self {
            web2,
            rebind,
            escalations,
        }
    }

    /// Unsealed payloads and log-only email.
    pub fn development(config: &Config, backend: Arc<dyn RecordBackend>) -> Self {
        warn!("Web2 payloads are NOT sealed - running in development mode");
        warn!("Notifications are written to the log only - no email leaves this process");
        Self::new(
            config,
            backend,
            Arc::new(UnsealedJsonCodec),
            Arc::new(LogTransport),
        )
    }

    /// Escalations awaiting review, oldest first, left in place.
    pub fn pending_escalations(&self) -> Vec<Escalation> {
        self.escalations.snapshot()
    }

    /// Hand every queued escalation to the operator log and clear the queue.
    pub fn report_escalations(&self) -> Vec<Escalation> {
        let escalations = self.escalations.drain();
        for escalation in &escalations {
            log_escalation(escalation);
        }
        escalations
    }

    /// Drop pending rebinds and collect anything still awaiting an operator.
    pub async fn shutdown(&self) -> ShutdownReport {
        let discarded_rebinds = self.rebind.shutdown().await;
        if discarded_rebinds > 0 {
            warn!("{discarded_rebinds} pending rebind(s) lost at shutdown");
        }

        let escalations = self.report_escalations();

        info!(
            "Identity services stopped ({} discarded, {} escalations)",
            discarded_rebinds,
            escalations.len()
        );
        ShutdownReport {
            discarded_rebinds,
            escalations,
        }
    }
}

fn log_escalation(escalation: &Escalation) {
    warn!(
        "Unreviewed escalation ({:?}) {} -> {} raised {}: {}",
        escalation.reason,
        escalation.old_key,
        escalation.new_key,
        escalation.raised_at,
        escalation.detail
    );
}
