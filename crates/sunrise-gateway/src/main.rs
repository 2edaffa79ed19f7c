//! Sunrise Gateway binary: load `.env` and config, set up logging, serve the mood form.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use sunrise_core::{MorningCoach, SunriseConfig};
use sunrise_gateway::{app, AppState};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sunrise-gateway", version, about = "Morning motivation web app")]
struct Args {
    /// Interface to bind (overrides `host` in config).
    #[arg(long)]
    host: Option<String>,
    /// Port to bind (overrides `port` in config).
    #[arg(long, short)]
    port: Option<u16>,
    /// Debug logging and persona details on the results page.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so OPENAI_API_KEY and SUNRISE__* reach the config loader.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[sunrise-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args = Args::parse();
    let mut cfg = SunriseConfig::load().context("loading configuration")?;
    if let Some(host) = args.host {
        cfg.host = host;
    }
    if let Some(port) = args.port {
        cfg.port = port;
    }
    cfg.debug |= args.debug;

    let _log_guard = init_tracing(&cfg);

    if !cfg.has_api_key() {
        tracing::warn!(
            "OPENAI_API_KEY is not set: every request will get the fallback message and no image"
        );
    }

    let state = Arc::new(AppState::new(MorningCoach::from_config(&cfg), cfg.debug));
    let router = app(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!(
        "Sunrise gateway {} listening on http://{} (chat model {}, image model {})",
        sunrise_core::version(),
        addr,
        cfg.chat_model,
        cfg.image_model
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Sunrise gateway stopped");
    Ok(())
}

/// Stdout always; a daily-rolling file too when `log_dir` is set. Keep the guard alive.
fn init_tracing(cfg: &SunriseConfig) -> Option<WorkerGuard> {
    let default_level = if cfg.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match cfg.log_dir.as_deref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sunrise-gateway.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested (Ctrl+C)");
}
