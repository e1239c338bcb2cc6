pub mod sqlite_preferences_repo;
pub mod sqlite_date_override_repo;

pub mod postgres_preferences_repo;
pub mod postgres_date_override_repo;

use crate::domain::models::preferences::{Preferences, PreferencesRow};
use crate::error::AppError;
use chrono::Utc;

fn encode_preferences(prefs: &Preferences) -> Result<PreferencesRow, AppError> {
    PreferencesRow::from_preferences(prefs, Utc::now())
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to encode preferences: {}", e)))
}

fn decode_preferences(row: PreferencesRow) -> Result<Preferences, AppError> {
    row.into_preferences()
        .map_err(|e| AppError::InternalWithMsg(format!("Stored preferences do not decode: {}", e)))
}
