use iv_server::{
    ESCALATION_REPORT_INTERVAL, IdentityApp, ServerError, ShutdownCoordinator, logger,
    spawn_escalation_reporter,
};
use iv_store::SqliteBackend;

use std::error::Error;
use std::sync::Arc;

use log::{debug, error, info};
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = iv_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::LogDirectory {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting iv-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    let database_path = config.database_path()?;
    let backend =
        SqliteBackend::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    let app = IdentityApp::development(&config, Arc::new(backend));
    info!("Identity services ready");

    let shutdown = ShutdownCoordinator::new();
    let mut shutdown_rx = shutdown.subscribe();
    let reporter = spawn_escalation_reporter(app.clone(), &shutdown, ESCALATION_REPORT_INTERVAL);
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let _ = shutdown_rx.recv().await;

    if let Err(e) = reporter.await {
        error!("Escalation reporter ended abnormally: {}", e);
    }

    let report = app.shutdown().await;
    debug!("Final metrics:\n{}", metrics.render());
    info!(
        "Graceful shutdown complete ({} pending rebinds discarded, {} escalations)",
        report.discarded_rebinds,
        report.escalations.len()
    );

    Ok(())
}
