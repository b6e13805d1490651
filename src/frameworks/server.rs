// Process bootstrap for the decode service: logging, collaborators, listener.

use crate::frameworks::config;
use crate::interface_adapters::clients::HttpImageFetcher;
use crate::interface_adapters::decoder::QrismDecoder;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::ScratchDir;

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// LOG_FORMAT=json emits one JSON object per event, with the decode span attached.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().with_current_span(true).init(),
        _ => builder.compact().init(),
    }

    // Panics inside a decode task land in the same log stream.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the decode API on an already bound listener (tests pass an ephemeral port).
pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(build_state()?);

    tracing::info!(%address, "decode api ready");

    axum::serve(listener, app)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "decode api stopped"))
}

// Entry point for the binary: `.env`, logging, then bind on loopback.
pub async fn run_with_config() -> Result<()> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    init_logging();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| tracing::error!(%address, error = %e, "cannot bind decode api"))?;

    run(listener).await
}

fn build_state() -> Result<Arc<AppState>> {
    let scratch = ScratchDir::new(config::scratch_dir());
    // Created eagerly so a bad QR_SCRATCH_DIR fails startup; requests recreate it if removed.
    scratch.ensure().inspect_err(|e| {
        tracing::error!(dir = %scratch.root().display(), error = %e, "failed to create scratch dir");
    })?;

    let fetch_timeout = config::image_fetch_timeout();
    let fetcher = HttpImageFetcher::new(fetch_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize image client: {e}")))?;
    tracing::debug!(
        scratch_dir = %scratch.root().display(),
        fetch_timeout_ms = fetch_timeout.as_millis(),
        "decode pipeline configured"
    );

    Ok(Arc::new(AppState {
        fetcher: Arc::new(fetcher),
        decoder: Arc::new(QrismDecoder),
        scratch,
    }))
}
