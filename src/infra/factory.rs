use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{mysql::{MySqlConnectOptions, MySqlPoolOptions}, sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}};
use sqlx::ConnectOptions;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::schema::initialize_schema;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::{
    mysql_booking_repo::MySqlBookingRepo, mysql_room_repo::MySqlRoomRepo,
    mysql_schema_repo::MySqlSchemaRepo, mysql_connection_check::MySqlConnectionCheck,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_room_repo::SqliteRoomRepo,
    sqlite_schema_repo::SqliteSchemaRepo, sqlite_connection_check::SqliteConnectionCheck,
};

fn is_mysql_url(url: &str) -> bool {
    url.starts_with("mysql://") || url.starts_with("mariadb://")
}

/// Connects to the configured database, prepares the schema and wires the repositories.
pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let database_url = &config.database_url;

    let state = if is_mysql_url(database_url) {
        info!("Initializing MySQL/MariaDB connection...");

        let opts = MySqlConnectOptions::from_str(database_url)
            .map_err(AppError::Database)?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(opts)
            .await
            .map_err(AppError::Database)?;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(MySqlBookingRepo::new(pool.clone())),
            room_repo: Arc::new(MySqlRoomRepo::new(pool.clone())),
            schema_repo: Arc::new(MySqlSchemaRepo::new(pool.clone())),
            connection_check: Arc::new(MySqlConnectionCheck::new(pool)),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .map_err(AppError::Database)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(opts)
            .await
            .map_err(AppError::Database)?;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            schema_repo: Arc::new(SqliteSchemaRepo::new(pool.clone())),
            connection_check: Arc::new(SqliteConnectionCheck::new(pool)),
        }
    };

    info!("Connected to database, booking mode: {}", config.booking_mode);
    initialize_schema(state.schema_repo.as_ref(), &config.room_seed).await?;

    Ok(state)
}
