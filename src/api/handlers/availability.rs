use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::responses::{CalendarDayResponse, ScheduleResponse};
use crate::domain::services::{time_slots::generate_timeline, validation};
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use std::collections::HashMap;

fn range_from_params(params: &HashMap<String, String>) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start_str = params.get("start").ok_or(AppError::MalformedInput("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::MalformedInput("end required".into()))?;
    validation::date_range(start_str, end_str)
}

fn dates_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d <= end)
}

pub async fn get_public_availability(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let availability = state.availability.resolve_public_availability().await?;
    Ok(Json(availability))
}

pub async fn get_public_calendar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = range_from_params(&params)?;
    let today = state.availability.today();
    let lead_days = state.config.public_lead_days;
    let snapshot = state.availability.snapshot_for_range(start, end).await?;

    let days: Vec<CalendarDayResponse> = dates_between(start, end)
        .map(|date| CalendarDayResponse {
            date,
            bookable: snapshot.is_bookable(date, today, lead_days),
            spots: snapshot.spots_for(date),
            time_slot: snapshot.slot_for(date).map(|s| s.label.clone()),
        })
        .collect();

    Ok(Json(days))
}

pub async fn get_admin_calendar(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = range_from_params(&params)?;
    let today = state.availability.today();
    let lead_days = state.config.admin_lead_days;
    let snapshot = state.availability.snapshot_for_range(start, end).await?;

    let days: Vec<_> = dates_between(start, end)
        .map(|date| snapshot.day_status(date, today, lead_days))
        .collect();

    Ok(Json(days))
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::MalformedInput("date required".into()))?;
    let date = validation::parse_date(date_str, "date")?;

    let snapshot = state.availability.snapshot_for_range(date, date).await?;
    let slot = snapshot.slot_for(date)
        .cloned()
        .ok_or_else(|| AppError::InternalWithMsg("No time slots configured".into()))?;
    let timeline = generate_timeline(&slot.start_time)?;

    Ok(Json(ScheduleResponse {
        date,
        time_slot: slot,
        timeline,
    }))
}
