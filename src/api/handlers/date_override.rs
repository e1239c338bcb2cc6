use axum::{extract::{rejection::JsonRejection, State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::{requests::DateOverrideRequest, responses::DeleteOverrideResponse};
use crate::domain::models::date_override::DateOverride;
use crate::domain::services::validation;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_overrides(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let today = state.availability.today();
    let overrides = state.availability.list_future_overrides(today).await?;
    Ok(Json(overrides))
}

pub async fn upsert_override(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    payload: Result<Json<DateOverrideRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let date = validation::parse_date(&payload.date, "date")?;
    let available_spots = validation::override_spots(payload.available_spots)?;
    let note = payload.note
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let entity = DateOverride::new(date, available_spots, note);
    let saved = state.availability.upsert_override(&entity).await?;
    Ok(Json(saved))
}

pub async fn delete_override(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(date_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let date = validation::parse_date(&date_str, "date")?;

    let removed = state.availability.delete_override(date).await?;
    Ok(Json(DeleteOverrideResponse {
        date,
        status: if removed { "deleted" } else { "absent" },
    }))
}
