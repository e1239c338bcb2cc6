use crate::domain::models::{date_override::DateOverride, preferences::Preferences};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn find(&self) -> Result<Option<Preferences>, AppError>;
    /// Replaces the singleton row wholesale and stamps `updated_at`.
    async fn replace(&self, prefs: &Preferences) -> Result<Preferences, AppError>;
    /// Returns true if a row was written.
    async fn insert_if_absent(&self, prefs: &Preferences) -> Result<bool, AppError>;
}

#[async_trait]
pub trait DateOverrideRepository: Send + Sync {
    async fn upsert(&self, entity: &DateOverride) -> Result<DateOverride, AppError>;
    async fn list_from(&self, from: NaiveDate) -> Result<Vec<DateOverride>, AppError>;
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DateOverride>, AppError>;
    /// Returns whether a row was removed. Absence is not an error.
    async fn delete(&self, date: NaiveDate) -> Result<bool, AppError>;
}

pub trait Clock: Send + Sync {
    /// Current calendar date in the business timezone.
    fn today(&self) -> NaiveDate;
}
