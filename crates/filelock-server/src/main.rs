//! Binary entrypoint for the file lock HTTP server.
//!
//! See [`filelock_server::settings`] for the environment variables read at
//! startup.

use filelock_server::router::build_router;
use filelock_server::settings::Settings;
use filelock_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env().expect("Invalid server settings");
    let state = AppState::new(&settings).expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", settings.port);
    tracing::info!("filelock server starting on {} (links at {})", addr, settings.base_url);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
