use axum::{extract::{rejection::FormRejection, State}, response::{IntoResponse, Response}, Form, Json};
use crate::state::AppState;
use crate::api::dtos::requests::BookingForm;
use crate::api::dtos::responses::BookingConfirmationResponse;
use crate::domain::models::booking::{generate_unique_code, BookingMode, NewBooking};
use crate::error::{AppError, PlainTextError};
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

const BOOKING_SUCCESS: &str = "Booking successful!";

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Result<Response, PlainTextError> {
    // An unparseable or absent body carries no fields at all.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("create_booking: unreadable form body: {}", rejection);
            BookingForm::default()
        }
    };
    debug!("create_booking: received {:?}", form);

    let mut booking = validate_form(form)?;
    let mode = state.config.booking_mode;

    if !mode.is_transactional() {
        let created = state.booking_repo.create(&booking).await.map_err(|e| {
            if e.is_value_too_long() { AppError::TooLong } else { e }
        })?;
        info!("Booking inserted: {}", created.id);
        return Ok(BOOKING_SUCCESS.into_response());
    }

    if mode.issues_unique_code() {
        booking.unique_code = Some(generate_unique_code());
    }

    info!("create_booking: Querying room type {}", booking.room_type);

    let confirmation = state.booking_repo.create_with_room(&booking).await.map_err(|e| match e {
        AppError::NotFound(_) => e,
        other => {
            error!("Error booking room: {}", other);
            AppError::BookingFailed
        }
    })?;

    info!("create_booking: Room details {:?}", confirmation.room);

    let echo = mode == BookingMode::UniqueCode;
    let response = BookingConfirmationResponse {
        message: BOOKING_SUCCESS.to_string(),
        unique_code: confirmation.booking.unique_code.clone(),
        full_name: echo.then(|| confirmation.booking.full_name.clone()),
        email: echo.then(|| confirmation.booking.email.clone()),
        room: confirmation.room,
    };

    Ok(Json(response).into_response())
}

/// Whitespace-only counts as missing; the value itself is kept as sent.
fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

fn validate_form(form: BookingForm) -> Result<NewBooking, AppError> {
    let (Some(full_name), Some(email), Some(phone_number), Some(check_in), Some(check_out), Some(guests), Some(room_type)) = (
        required(form.name),
        required(form.email),
        required(form.phone_number),
        required(form.check_in_date),
        required(form.check_out_date),
        required(form.guests),
        required(form.room_type),
    ) else {
        return Err(AppError::Validation("All fields are required.".into()));
    };

    let check_in_date = NaiveDate::parse_from_str(check_in.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid check-in date format (YYYY-MM-DD)".into()))?;
    let check_out_date = NaiveDate::parse_from_str(check_out.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid check-out date format (YYYY-MM-DD)".into()))?;

    if check_out_date <= check_in_date {
        return Err(AppError::Validation("Check-out date must be after check-in date".into()));
    }

    let guests: i32 = guests.trim().parse()
        .map_err(|_| AppError::Validation("Guests must be a whole number".into()))?;
    if guests < 1 {
        return Err(AppError::Validation("At least one guest is required".into()));
    }

    Ok(NewBooking {
        full_name,
        email,
        phone_number,
        check_in_date,
        check_out_date,
        guests,
        room_type,
        unique_code: None,
    })
}
