use axum::{extract::{rejection::JsonRejection, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::BookingCheckRequest, responses::BookingCheckResponse};
use crate::domain::services::validation;
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// Validates a booking-form selection against the public lead time and
/// reports dates whose capacity is below the requested guest count.
pub async fn check_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingCheckRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    if payload.dates.is_empty() {
        return Err(AppError::MalformedInput("dates must not be empty".into()));
    }
    let guests = validation::guest_count(payload.guests)?;
    let mut dates = payload.dates
        .iter()
        .map(|d| validation::parse_date(d, "dates[]"))
        .collect::<Result<Vec<_>, _>>()?;
    dates.sort();
    dates.dedup();

    let today = state.availability.today();
    let lead_days = state.config.public_lead_days;
    let snapshot = state.availability.snapshot().await?;

    let (bookable_dates, unavailable_dates): (Vec<_>, Vec<_>) = dates
        .into_iter()
        .partition(|&date| snapshot.is_bookable(date, today, lead_days));

    let warnings = snapshot.capacity_warnings(&bookable_dates, guests);
    debug!(
        guests,
        unavailable = unavailable_dates.len(),
        warnings = warnings.len(),
        "Checked booking selection"
    );

    Ok(Json(BookingCheckResponse {
        bookable: unavailable_dates.is_empty(),
        unavailable_dates,
        warnings,
    }))
}
