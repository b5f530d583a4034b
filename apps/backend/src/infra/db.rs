//! Connection setup and boot-time migrations.

use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Kept open for the life of the pool; an in-memory SQLite database vanishes
/// with its last connection.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    pub fn from_url(url: &str) -> Result<Self, AppError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DbKind::Postgres)
        } else if url.starts_with("sqlite:") {
            if url.contains(":memory:") || url.contains("mode=memory") {
                Ok(DbKind::SqliteMemory)
            } else {
                Ok(DbKind::SqliteFile)
            }
        } else {
            Err(AppError::config(format!(
                "Unsupported database URL scheme: '{}'",
                sanitize_db_url(url)
            )))
        }
    }
}

/// Hide the password component of a connection URL for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest = &url[scheme_end + 3..];
    let Some(at) = rest.find('@') else {
        return url.to_string();
    };
    let userinfo = &rest[..at];
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{}{user}:***{}", &url[..scheme_end + 3], &rest[at..]),
        None => url.to_string(),
    }
}

fn connect_options(url: &str, kind: DbKind) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.sqlx_logging(false)
        .acquire_timeout(Duration::from_secs(5));

    match kind {
        DbKind::SqliteMemory => {
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(MEMORY_CONN_LIFETIME)
                .max_lifetime(MEMORY_CONN_LIFETIME);
        }
        DbKind::SqliteFile => {
            opt.max_connections(5);
        }
        DbKind::Postgres => {
            opt.max_connections(10).min_connections(1);
        }
    }
    opt
}

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Open a pool for `url`. Does not migrate.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let kind = DbKind::from_url(url)?;
    let attempts = match kind {
        DbKind::SqliteMemory => 1,
        _ => CONNECT_ATTEMPTS,
    };

    let conn = retry_connection(
        move || async move {
            Database::connect(connect_options(url, kind))
                .await
                .map_err(AppError::from)
        },
        attempts,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await?;

    info!(db_kind = ?kind, url = %sanitize_db_url(url), "database connected");
    Ok(conn)
}

/// Connect and apply pending migrations.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;
    Ok(conn)
}
