use crate::domain::{models::room::Room, ports::RoomRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::MySqlPool;

pub struct MySqlRoomRepo {
    pool: MySqlPool,
}

impl MySqlRoomRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for MySqlRoomRepo {
    async fn list(&self) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>(
            "SELECT id, room_number, type, CAST(price AS CHAR) AS price, capacity, description FROM rooms ORDER BY id ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
