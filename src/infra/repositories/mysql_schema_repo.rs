use crate::domain::{models::room::NewRoom, ports::SchemaRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

pub struct MySqlSchemaRepo {
    pool: MySqlPool,
}

impl MySqlSchemaRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const CREATE_BOOKINGS: &str = "
    CREATE TABLE IF NOT EXISTS bookings (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        full_name VARCHAR(100) NOT NULL,
        email VARCHAR(100) NOT NULL,
        phone_number VARCHAR(20) NOT NULL,
        check_in_date DATE NOT NULL,
        check_out_date DATE NOT NULL,
        guests INT NOT NULL,
        room_type VARCHAR(50) NOT NULL
    )";

const CREATE_ROOMS: &str = "
    CREATE TABLE IF NOT EXISTS rooms (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        room_number VARCHAR(50) NOT NULL,
        type VARCHAR(50) NOT NULL,
        price DECIMAL(10, 2) NOT NULL,
        capacity INT NOT NULL,
        description TEXT
    )";

#[async_trait]
impl SchemaRepository for MySqlSchemaRepo {
    async fn ensure_tables(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_BOOKINGS).execute(&self.pool).await.map_err(AppError::Database)?;
        sqlx::query(CREATE_ROOMS).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn has_column(&self, table: &str, column: &str) -> Result<bool, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM information_schema.columns
             WHERE table_schema = DATABASE() AND table_name = ? AND column_name = ?"
        )
            .bind(table)
            .bind(column)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn add_unique_code_column(&self) -> Result<(), AppError> {
        sqlx::query("ALTER TABLE bookings ADD COLUMN unique_code VARCHAR(100) NULL")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn count_rooms(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM rooms").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn insert_rooms(&self, rooms: &[NewRoom]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut inserted = 0;
        for room in rooms {
            let result = sqlx::query("INSERT INTO rooms (room_number, type, price, capacity, description) VALUES (?, ?, ?, ?, ?)")
                .bind(&room.room_number).bind(&room.room_type).bind(room.price).bind(room.capacity).bind(&room.description)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
            inserted += result.rows_affected();
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(inserted)
    }
}
