use tracing::warn;

mod app;
mod config;
mod error;
mod registro;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "cadastro=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await;

    // Apply the schema when a database is configured. Failure is logged and
    // the process keeps serving static assets and /api/ping.
    if let Some(db) = &state.db {
        if let Err(e) = sqlx::migrate!("./migrations").run(db).await {
            warn!(error = %e, "migration failed; continuing");
        }
    }

    let app = app::build_app(state);
    app::serve(app).await
}
