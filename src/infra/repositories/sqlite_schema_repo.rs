use crate::domain::{models::room::NewRoom, ports::SchemaRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqlitePool, Row};

pub struct SqliteSchemaRepo {
    pool: SqlitePool,
}

impl SqliteSchemaRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// SQLite ignores VARCHAR widths, so the CHECK clauses stand in for them.
const CREATE_BOOKINGS: &str = "
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name VARCHAR(100) NOT NULL CHECK (length(full_name) <= 100),
        email VARCHAR(100) NOT NULL CHECK (length(email) <= 100),
        phone_number VARCHAR(20) NOT NULL CHECK (length(phone_number) <= 20),
        check_in_date DATE NOT NULL,
        check_out_date DATE NOT NULL,
        guests INTEGER NOT NULL,
        room_type VARCHAR(50) NOT NULL CHECK (length(room_type) <= 50)
    )";

const CREATE_ROOMS: &str = "
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        room_number VARCHAR(50) NOT NULL,
        type VARCHAR(50) NOT NULL,
        price DECIMAL(10, 2) NOT NULL,
        capacity INTEGER NOT NULL,
        description TEXT
    )";

#[async_trait]
impl SchemaRepository for SqliteSchemaRepo {
    async fn ensure_tables(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_BOOKINGS).execute(&self.pool).await.map_err(AppError::Database)?;
        sqlx::query(CREATE_ROOMS).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn has_column(&self, table: &str, column: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM pragma_table_info(?) WHERE name = ?")
            .bind(table)
            .bind(column)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn add_unique_code_column(&self) -> Result<(), AppError> {
        sqlx::query("ALTER TABLE bookings ADD COLUMN unique_code VARCHAR(100) CHECK (length(unique_code) <= 100)")
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
