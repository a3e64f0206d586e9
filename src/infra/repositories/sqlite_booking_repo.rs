use crate::domain::{
    models::{booking::{Booking, BookingConfirmation, NewBooking}, room::RoomDetails},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const INSERT_BOOKING: &str =
    "INSERT INTO bookings (full_name, email, phone_number, check_in_date, check_out_date, guests, room_type, unique_code)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?)
     RETURNING *";

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(INSERT_BOOKING)
            .bind(&booking.full_name).bind(&booking.email).bind(&booking.phone_number)
            .bind(booking.check_in_date).bind(booking.check_out_date).bind(booking.guests)
            .bind(&booking.room_type).bind(&booking.unique_code)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn create_with_room(&self, booking: &NewBooking) -> Result<BookingConfirmation, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Booking>(INSERT_BOOKING)
            .bind(&booking.full_name).bind(&booking.email).bind(&booking.phone_number)
            .bind(booking.check_in_date).bind(booking.check_out_date).bind(booking.guests)
            .bind(&booking.room_type).bind(&booking.unique_code)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;
        info!("Booking inserted: {}", created.id);

        let room = sqlx::query_as::<_, RoomDetails>(
            "SELECT room_number, type, printf('%.2f', price) AS price, capacity, description
             FROM rooms WHERE type = ? LIMIT 1"
        )
            .bind(&booking.room_type)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        let Some(room) = room else {
            tx.rollback().await.map_err(AppError::Database)?;
            return Err(AppError::NotFound("No rooms available of the selected type.".into()));
        };

        tx.commit().await.map_err(AppError::Database)?;
        Ok(BookingConfirmation { booking: created, room })
    }
}
