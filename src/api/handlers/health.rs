use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::HealthResponse;
use crate::error::AppError;
use std::sync::Arc;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.connection_check.ping().await?;
    Ok(Json(HealthResponse { status: "ok" }))
}
