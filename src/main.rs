use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dify_relay::adapters::dify::DifyClient;
use dify_relay::adapters::http::{app_router, AppState};
use dify_relay::adapters::line::{LineReplyClient, SignatureVerifier};
use dify_relay::adapters::storage::{InMemorySessionStore, InMemorySettingsStore};
use dify_relay::application::MessageRouter;
use dify_relay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_directive())),
        )
        .init();

    let settings = Arc::new(InMemorySettingsStore::new());
    let sessions = Arc::new(InMemorySessionStore::new());

    let backend = Arc::new(DifyClient::new(
        config.dify.clone(),
        settings.clone(),
        sessions.clone(),
    ));
    let router = Arc::new(MessageRouter::new(settings, sessions, backend));

    let state = AppState {
        router,
        reply_sender: Arc::new(LineReplyClient::new(config.line.clone())),
        verifier: SignatureVerifier::new(config.line.channel_secret()),
    };

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "dify-relay listening");

    axum::serve(listener, app_router(state)).await?;

    Ok(())
}
