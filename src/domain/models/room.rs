use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub room_type: String,
    pub price: String,
    pub capacity: i32,
    pub description: Option<String>,
}

/// Room fields returned in a booking confirmation.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RoomDetails {
    pub room_number: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub room_type: String,
    pub price: String,
    pub capacity: i32,
    pub description: Option<String>,
}

/// Seed row, as read from `ROOM_SEED_FILE` or the built-in defaults.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewRoom {
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub capacity: i32,
    pub description: Option<String>,
}

impl NewRoom {
    pub fn new(room_number: &str, room_type: &str, price: f64, capacity: i32, description: &str) -> Self {
        Self {
            room_number: room_number.to_string(),
            room_type: room_type.to_string(),
            price,
            capacity,
            description: Some(description.to_string()),
        }
    }
}

pub fn default_seed_rooms() -> Vec<NewRoom> {
    vec![
        NewRoom::new("101", "Single Room", 100.00, 1, "A cozy single room"),
        NewRoom::new("102", "Double Room", 150.00, 2, "A comfortable double room"),
        NewRoom::new("103", "Family Room", 200.00, 4, "A spacious family room"),
    ]
}
