use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::error::ApiError;

/// Process-wide state, built once at startup and handed to every handler
/// through axum's state extractor. `db` is `None` when the database
/// configuration is incomplete: the service still serves static assets and
/// `/api/ping`, while registration answers 500 until it is fixed.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> Self {
        let config = Arc::new(AppConfig::from_env());

        let db = match &config.db {
            Some(db_config) => {
                let pool = PgPoolOptions::new()
                    .max_connections(10)
                    .connect_lazy_with(db_config.connect_options());

                // Probe once so connectivity problems show up in the logs at
                // startup instead of on the first registration. The pool is
                // kept either way and recovers when the database does.
                match pool.acquire().await {
                    Ok(_) => {
                        info!(host = %db_config.host, database = %db_config.database, "database connected");
                    }
                    Err(e) => {
                        warn!(error = %e, "database unreachable at startup; registration will fail until it recovers");
                    }
                }
                Some(pool)
            }
            None => None,
        };

        Self { db, config }
    }

    /// Pool accessor for handlers that need the database.
    pub fn db(&self) -> Result<&PgPool, ApiError> {
        self.db.as_ref().ok_or_else(|| {
            error!("database not configured; rejecting request");
            ApiError::Internal(anyhow::anyhow!("database not configured"))
        })
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self {
            db: None,
            config: Arc::new(AppConfig {
                db: None,
                static_dir: "frontend".into(),
                spa_index: "frontend/html/index.html".into(),
            }),
        }
    }
}
