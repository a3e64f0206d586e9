use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use sqlx::FromRow;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::domain::models::room::RoomDetails;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub room_type: String,
    pub unique_code: Option<String>,
}

/// A validated submission that has not been written yet.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub room_type: String,
    pub unique_code: Option<String>,
}

impl NewBooking {
    pub fn into_booking(self, id: i64) -> Booking {
        Booking {
            id,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            guests: self.guests,
            room_type: self.room_type,
            unique_code: self.unique_code,
        }
    }
}

/// Result of a transactional booking: the committed row plus the room it matched.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub room: RoomDetails,
}

/// How `/book` processes a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingMode {
    /// Plain insert, no room lookup, plain-text reply.
    Simple,
    /// Insert and room lookup in one transaction, JSON reply with the room.
    Transactional,
    /// Like `Transactional`, plus a generated booking code echoed back with the guest's name and email.
    UniqueCode,
}

impl BookingMode {
    pub fn is_transactional(self) -> bool {
        !matches!(self, BookingMode::Simple)
    }

    pub fn issues_unique_code(self) -> bool {
        matches!(self, BookingMode::UniqueCode)
    }
}

impl FromStr for BookingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "simple" => Ok(BookingMode::Simple),
            "transactional" => Ok(BookingMode::Transactional),
            "unique_code" => Ok(BookingMode::UniqueCode),
            other => Err(format!("unknown booking mode '{}'", other)),
        }
    }
}

impl fmt::Display for BookingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingMode::Simple => "simple",
            BookingMode::Transactional => "transactional",
            BookingMode::UniqueCode => "unique_code",
        };
        f.write_str(name)
    }
}

/// 16 random bytes as 32 lowercase hex characters.
pub fn generate_unique_code() -> String {
    let bytes: [u8; 16] = rand::thread_rng().r#gen();
    hex::encode(bytes)
}
