use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;
use tracing::error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Value too long")]
    TooLong,
    #[error("Booking transaction failed")]
    BookingFailed,
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl AppError {
    /// Transport-level failures after which a fresh connection can succeed.
    pub fn is_connection_lost(&self) -> bool {
        match self {
            AppError::Database(sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut) => true,
            AppError::Database(sqlx::Error::Database(db_err)) => {
                // 1053 = server shutdown in progress, 1927 = connection killed
                db_err
                    .try_downcast_ref::<MySqlDatabaseError>()
                    .is_some_and(|e| matches!(e.number(), 1053 | 1927))
            }
            _ => false,
        }
    }

    pub fn is_value_too_long(&self) -> bool {
        let AppError::Database(sqlx::Error::Database(db_err)) = self else {
            return false;
        };

        // 22001 = SQLSTATE string data right truncation (MySQL 1406)
        // 275 = SQLite CHECK constraint (column length guards)
        if let Some(mysql_err) = db_err.try_downcast_ref::<MySqlDatabaseError>() {
            return mysql_err.number() == 1406;
        }
        matches!(db_err.code().as_deref(), Some("22001") | Some("275"))
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::TooLong => (StatusCode::BAD_REQUEST, "One or more fields are too long.".to_string()),
            AppError::BookingFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error booking your room. Please try again later.".to_string(),
            ),
            AppError::Config(e) => {
                error!("Configuration error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Renders an `AppError` as a bare `text/plain` message, the shape form
/// clients of `/book` expect.
#[derive(Debug)]
pub struct PlainTextError(pub AppError);

impl From<AppError> for PlainTextError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        self.0.status_and_message().into_response()
    }
}
