use std::net::SocketAddr;
use std::sync::Arc;

use fishing_ai_server::{
    app,
    config::AppConfig,
    domain::ai::{AiService, OpenAiBackend, SharedAiBackend},
    domain::health::HealthService,
    logging, shutdown,
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let _guard = logging::init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let backend: SharedAiBackend = Arc::new(OpenAiBackend::new(&config));
    let state = AppState {
        ai_service: AiService::new(backend.clone()),
        health_service: HealthService::new(backend),
        config,
    };

    tracing::info!(
        model = %state.config.openai_model,
        "Server listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .expect("server error");
}
