//! Launchpad - Entry Point
//!
//! A small deploy console service: triggers deployments of a web site on a
//! remote Coolify instance and keeps the deployment history fresh for an
//! admin dashboard.

use std::sync::Arc;

use launchpad::config::Settings;
use launchpad::deploy::facade::DeployFacade;
use launchpad::http::client::CoolifyClient;
use launchpad::logs::{init_logging, LogOptions};
use launchpad::poll::controller::PollingController;
use launchpad::poll::feed::DeploymentFeed;
use launchpad::server::serve::serve;
use launchpad::server::state::ServerState;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_logging(LogOptions {
        log_level: settings.log_level.clone(),
        ..Default::default()
    })?;

    info!("Starting Launchpad on {}:{}", settings.server.host, settings.server.port);

    // Direct wiring: one client, one facade, passed explicitly to whatever
    // needs them (no service registry)
    let client = Arc::new(CoolifyClient::new(settings.coolify.clone())?);
    let facade = Arc::new(DeployFacade::new(client));
    let state = Arc::new(ServerState::new(facade.clone()));

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server_handle = serve(&settings.server, state, async {
        let _ = shutdown_rx.await;
    })
    .await?;

    // Background poller keeping the last known deployment list warm
    let mut poller = if settings.enable_poller {
        let feed = Arc::new(DeploymentFeed::new(facade.clone(), 10));
        let tick_feed = feed.clone();
        let mut controller = PollingController::from_fn(settings.poll_interval(), move || {
            let feed = tick_feed.clone();
            async move { feed.refresh().await }
        });
        controller.mount().await;
        Some(controller)
    } else {
        None
    };

    await_shutdown_signal().await;

    if let Some(controller) = poller.as_mut() {
        controller.stop();
    }
    let _ = shutdown_tx.send(());
    server_handle.await??;

    info!("Launchpad stopped");
    Ok(())
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("Ctrl+C received, shutting down...");
    }
}
