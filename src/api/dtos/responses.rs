use serde::Serialize;
use crate::domain::models::room::RoomDetails;

#[derive(Serialize)]
pub struct BookingConfirmationResponse {
    pub message: String,
    #[serde(rename = "uniqueCode", skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub room: RoomDetails,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
