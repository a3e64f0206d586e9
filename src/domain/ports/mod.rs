use crate::domain::models::{
    booking::{Booking, BookingConfirmation, NewBooking},
    room::{NewRoom, Room},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait SchemaRepository: Send + Sync {
    async fn ensure_tables(&self) -> Result<(), AppError>;
    async fn has_column(&self, table: &str, column: &str) -> Result<bool, AppError>;
    async fn add_unique_code_column(&self) -> Result<(), AppError>;
    async fn count_rooms(&self) -> Result<i64, AppError>;
    async fn insert_rooms(&self, rooms: &[NewRoom]) -> Result<u64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Plain insert, no transaction and no room lookup.
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    /// Insert plus room lookup in one transaction. No room of the requested
    /// type rolls the insert back and yields `AppError::NotFound`.
    async fn create_with_room(&self, booking: &NewBooking) -> Result<BookingConfirmation, AppError>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Room>, AppError>;
}

#[async_trait]
pub trait ConnectionCheck: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
    /// Establishes and checks a fresh connection.
    async fn reconnect(&self) -> Result<(), AppError>;
}
