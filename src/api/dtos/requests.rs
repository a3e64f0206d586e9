use serde::Deserialize;

/// Form fields posted to `/book`. Everything is optional here so that a
/// missing field surfaces as a validation error rather than a rejection.
#[derive(Deserialize, Debug, Default)]
pub struct BookingForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub guests: Option<String>,
    pub room_type: Option<String>,
}
