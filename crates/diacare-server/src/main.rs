use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use diacare_render::pages::Pages;
use diacare_server::config::Config;
use diacare_server::state::AppState;
use diacare_storage::records::RecordStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    tracing::info!(store = %config.store_url, "connecting to record store");
    let store = RecordStore::connect(&config.store_url).await;
    let pages = Pages::load()?;

    let state = AppState {
        store,
        pages: Arc::new(pages),
    };
    let app = diacare_server::app(state);

    let listener = TcpListener::bind((config.bind_addr, config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// JSON lines when `DIACARE_LOG_FORMAT=json`, human-readable otherwise.
fn init_tracing() {
    let json = std::env::var("DIACARE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
            Err(e) => tracing::error!("failed to listen for Ctrl+C: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
