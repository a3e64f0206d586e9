use crate::domain::ports::ConnectionCheck;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Connection, SqlitePool};

pub struct SqliteConnectionCheck {
    pool: SqlitePool,
}

impl SqliteConnectionCheck {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionCheck for SqliteConnectionCheck {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn reconnect(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await.map_err(AppError::Database)?;
        conn.ping().await.map_err(AppError::Database)
    }
}
