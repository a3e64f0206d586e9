pub mod sqlite_booking_repo;
pub mod sqlite_room_repo;
pub mod sqlite_schema_repo;
pub mod sqlite_connection_check;

pub mod mysql_booking_repo;
pub mod mysql_room_repo;
pub mod mysql_schema_repo;
pub mod mysql_connection_check;
