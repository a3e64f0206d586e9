use std::sync::Arc;
use crate::domain::ports::{BookingRepository, ConnectionCheck, RoomRepository, SchemaRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub room_repo: Arc<dyn RoomRepository>,
    pub schema_repo: Arc<dyn SchemaRepository>,
    pub connection_check: Arc<dyn ConnectionCheck>,
}
