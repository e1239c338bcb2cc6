use axum::{extract::{rejection::JsonRejection, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::SavePreferencesRequest;
use crate::domain::models::preferences::Preferences;
use crate::domain::services::validation;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let prefs = state.availability.get_preferences().await?;
    Ok(Json(prefs))
}

pub async fn save_preferences(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    payload: Result<Json<SavePreferencesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let prefs = validate_preferences(&payload)?;

    let saved = state.availability.save_preferences(&prefs).await?;
    Ok(Json(saved))
}

/// Every field is checked before anything is written.
fn validate_preferences(payload: &SavePreferencesRequest) -> Result<Preferences, AppError> {
    let season_start = validation::month_day(payload.season_start.month, payload.season_start.day, "season_start")?;
    let season_end = validation::month_day(payload.season_end.month, payload.season_end.day, "season_end")?;
    let available_days = validation::weekday_set(&payload.available_days)?;
    let default_spots = validation::default_spots(payload.default_spots)?;

    if payload.monthly_time_slots.is_empty() {
        return Err(AppError::OutOfRange("At least one time slot is required".into()));
    }

    let monthly_time_slots = payload.monthly_time_slots
        .iter()
        .map(|s| validation::time_slot(&s.label, &s.months, &s.start_time, &s.end_time))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Preferences {
        season_start,
        season_end,
        available_days,
        default_spots,
        monthly_time_slots,
        updated_at: None,
    })
}
