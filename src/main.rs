use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber;

use gatekeeper::config::GatekeeperConfig;
use gatekeeper::grpc::GrpcServer;
use gatekeeper::ratelimit::{AdmissionEngine, Sweeper};

#[derive(Debug, Parser)]
#[command(name = "gatekeeper", about = "Admission control service", version)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .init();

    info!("Starting Gatekeeper Admission Control Service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Load configuration
    let config = match args.config {
        Some(path) => GatekeeperConfig::from_file(&path)?,
        None => GatekeeperConfig::default(),
    };
    config.server.validate()?;
    config.limits.validate()?;
    info!(
        grpc_addr = %config.server.grpc_addr,
        window_ms = config.limits.window_ms,
        max_requests = config.limits.max_requests,
        ban_threshold = config.limits.ban_threshold,
        ban_duration_ms = config.limits.ban_duration_ms,
        "Configuration loaded"
    );

    // Initialize the admission engine
    let engine = Arc::new(AdmissionEngine::new(config.limits.clone()));
    info!("Admission engine initialized");

    // Start the background sweeper
    let sweeper = Sweeper::new(
        Arc::clone(&engine),
        Duration::from_secs(config.server.sweep_interval_secs),
    );
    let sweeper_handle = tokio::spawn(sweeper.run());

    // Create and start the gRPC server
    let grpc_server = GrpcServer::new(config.server.grpc_addr, engine);

    info!("Starting gRPC server on {}", config.server.grpc_addr);

    // Run the server with graceful shutdown on Ctrl+C
    grpc_server.serve_with_shutdown(shutdown_signal()).await?;

    // Evictions are single atomic removals, so stopping the sweeper between
    // (or even during) sweeps cannot leave a half-deleted record behind.
    sweeper_handle.abort();

    info!("Gatekeeper Admission Control Service stopped");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
