use crate::{IdentityApp, ShutdownCoordinator};

use std::time::Duration;

use log::{debug, info};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// How often queued escalations are flushed to the operator log.
pub const ESCALATION_REPORT_INTERVAL: Duration = Duration::from_secs(60);

/// Flush escalations every `period` until shutdown is signalled.
///
/// Subscribes before returning, so a shutdown sent right after this call is seen.
pub fn spawn_escalation_reporter(
    app: IdentityApp,
    shutdown: &ShutdownCoordinator,
    period: Duration,
) -> JoinHandle<()> {
    let mut shutdown_rx = shutdown.subscribe();

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Escalation reporter stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let reported = app.report_escalations();
                    if !reported.is_empty() {
                        debug!("Reported {} escalation(s)", reported.len());
                    }
                }
            }
        }
    })
}
