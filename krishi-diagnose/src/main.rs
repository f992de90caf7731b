//! Crop Diagnosis (krishi-diagnose) - Main entry point
//!
//! Serves the crop photo diagnosis and soil health intake workflow over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use krishi_common::config::{ensure_root_folder, resolve_root_folder, TomlConfig};
use krishi_common::context::{JsonFileStore, UserContext};
use krishi_common::events::EventBus;
use krishi_common::Language;
use krishi_diagnose::backend::SimulatedBackend;
use krishi_diagnose::location::LocationHierarchy;
use krishi_diagnose::workflow::WorkflowRegistry;
use krishi_diagnose::{build_router, AppState};

/// Event bus capacity; progress events are small and short-lived
const EVENT_BUS_CAPACITY: usize = 256;

/// Command-line arguments for krishi-diagnose
#[derive(Parser, Debug)]
#[command(name = "krishi-diagnose")]
#[command(about = "Crop diagnosis and soil health intake for Krishi")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "KRISHI_DIAGNOSE_PORT")]
    port: Option<u16>,

    /// Interface to bind (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Root folder for the persisted user context
    #[arg(short, long, env = "KRISHI_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Configuration is needed before tracing so logging.level can apply
    let mut config =
        TomlConfig::resolve(args.config.as_deref()).context("Failed to load configuration")?;
    config.apply_env_overrides();
    config
        .analysis
        .validate()
        .context("Invalid analysis configuration")?;

    // Initialize tracing
    let default_filter = if config.logging.level.contains('=') {
        config.logging.level.clone()
    } else {
        format!(
            "krishi_diagnose={0},krishi_common={0},tower_http={0}",
            config.logging.level
        )
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = args.port.unwrap_or(config.port);
    let host = args.host.clone().unwrap_or_else(|| config.host.clone());
    info!("Starting Krishi crop diagnosis on {}:{}", host, port);

    // Persisted language and login
    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "KRISHI_ROOT_FOLDER", &config);
    ensure_root_folder(&root_folder).context("Failed to prepare root folder")?;
    info!("Root folder: {}", root_folder.display());

    let default_language = Language::from_key(&config.default_language).unwrap_or_else(|| {
        warn!(
            "Unknown default_language '{}', using English",
            config.default_language
        );
        Language::En
    });
    let store = JsonFileStore::in_root_folder(&root_folder);
    let context = UserContext::hydrate(Box::new(store), default_language).await;

    // Location hierarchy
    let hierarchy = match &config.locations_file {
        Some(path) => LocationHierarchy::load(path).context("Failed to load location hierarchy")?,
        None => LocationHierarchy::builtin(),
    };
    info!("Location hierarchy: {} states", hierarchy.states().len());

    // Workflow engine
    let backend = SimulatedBackend::new(Duration::from_millis(config.analysis.backend_latency_ms));
    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
    let registry = WorkflowRegistry::new(
        Arc::new(hierarchy),
        Arc::new(backend),
        config.analysis.clone(),
        event_bus.clone(),
    );

    let app_state = AppState::new(registry.clone(), context, event_bus);
    let app = build_router(app_state);

    let ip: std::net::IpAddr = host
        .parse()
        .with_context(|| format!("Invalid host address: {}", host))?;
    let addr = SocketAddr::new(ip, port);

    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Stop any analysis timers still running
    registry.close_all().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
