//! Feed Route
//!
//! - GET /api/appointments - One feed load, returned as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::model::Appointment;

/// GET /api/appointments
///
/// 502 with the user-facing message when the feed cannot be loaded.
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Appointment>>> {
    let appointments = state.source.load().await?;
    Ok(Json(appointments))
}
