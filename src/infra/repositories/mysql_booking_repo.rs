use crate::domain::{
    models::{booking::{Booking, BookingConfirmation, NewBooking}, room::RoomDetails},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::info;

pub struct MySqlBookingRepo {
    pool: MySqlPool,
}

impl MySqlBookingRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const INSERT_BOOKING: &str =
    "INSERT INTO bookings (full_name, email, phone_number, check_in_date, check_out_date, guests, room_type, unique_code)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

#[async_trait]
impl BookingRepository for MySqlBookingRepo {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        let result = sqlx::query(INSERT_BOOKING)
            .bind(&booking.full_name).bind(&booking.email).bind(&booking.phone_number)
            .bind(booking.check_in_date).bind(booking.check_out_date).bind(booking.guests)
            .bind(&booking.room_type).bind(&booking.unique_code)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(booking.clone().into_booking(result.last_insert_id() as i64))
    }

    async fn create_with_room(&self, booking: &NewBooking) -> Result<BookingConfirmation, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let result = sqlx::query(INSERT_BOOKING)
            .bind(&booking.full_name).bind(&booking.email).bind(&booking.phone_number)
            .bind(booking.check_in_date).bind(booking.check_out_date).bind(booking.guests)
            .bind(&booking.room_type).bind(&booking.unique_code)
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        let id = result.last_insert_id() as i64;
        info!("Booking inserted: {}", id);

        let room = sqlx::query_as::<_, RoomDetails>(
            "SELECT room_number, type, CAST(price AS CHAR) AS price, capacity, description
             FROM rooms WHERE type = ? LIMIT 1"
        )
            .bind(&booking.room_type)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        let Some(room) = room else {
            tx.rollback().await.map_err(AppError::Database)?;
            return Err(AppError::NotFound("No rooms available of the selected type.".into()));
        };

        tx.commit().await.map_err(AppError::Database)?;
        Ok(BookingConfirmation { booking: booking.clone().into_booking(id), room })
    }
}
