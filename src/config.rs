use std::path::PathBuf;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use tracing::warn;

/// Connection parameters for the Postgres pool. All five variables are
/// required; when any is absent the process still starts and serves the
/// static frontend, but the registration API stays unusable.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    fn from_env() -> Option<Self> {
        let mut missing: Vec<&str> = Vec::new();
        let host = require_var("DB_HOST", &mut missing);
        let port = require_var("DB_PORT", &mut missing);
        let user = require_var("DB_USER", &mut missing);
        let password = require_var("DB_PASSWORD", &mut missing);
        let database = require_var("DB_NAME", &mut missing);

        let (Some(host), Some(port), Some(user), Some(password), Some(database)) =
            (host, port, user, password, database)
        else {
            warn!(missing = ?missing, "database configuration incomplete; registration disabled");
            return None;
        };

        let port = match port.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                warn!("DB_PORT is not a valid port number; registration disabled");
                return None;
            }
        };

        Some(Self {
            host,
            port,
            user,
            password,
            database,
        })
    }

    /// Built from discrete parts instead of a URL so passwords never need
    /// percent-encoding.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub db: Option<DbConfig>,
    /// Root of the static frontend, served at the HTTP root.
    pub static_dir: PathBuf,
    /// SPA entry document returned for every unmatched path.
    pub spa_index: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "frontend".into()));
        let spa_index = std::env::var("SPA_INDEX")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("html").join("index.html"));

        Self {
            db: DbConfig::from_env(),
            static_dir,
            spa_index,
        }
    }
}

fn require_var(name: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(name);
            None
        }
    }
}
