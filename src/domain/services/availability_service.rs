use std::sync::Arc;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};
use crate::domain::{
    models::{date_override::DateOverride, preferences::Preferences},
    ports::{Clock, DateOverrideRepository, PreferencesRepository},
    services::{
        availability::AvailabilitySnapshot,
        capacity::{resolve_public_overrides, ResolvedOverride},
    },
};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct PublicAvailability {
    pub preferences: Preferences,
    pub date_overrides: Vec<ResolvedOverride>,
}

/// Read and write surface over the preference and override stores.
pub struct AvailabilityService {
    preferences_repo: Arc<dyn PreferencesRepository>,
    override_repo: Arc<dyn DateOverrideRepository>,
    clock: Arc<dyn Clock>,
}

impl AvailabilityService {
    pub fn new(
        preferences_repo: Arc<dyn PreferencesRepository>,
        override_repo: Arc<dyn DateOverrideRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { preferences_repo, override_repo, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Stored preferences, or the built-in defaults when none were saved yet.
    pub async fn get_preferences(&self) -> Result<Preferences, AppError> {
        match self.preferences_repo.find().await? {
            Some(prefs) => Ok(prefs),
            None => {
                debug!("No stored preferences, using defaults");
                Ok(Preferences::default())
            }
        }
    }

    pub async fn seed_defaults(&self) -> Result<(), AppError> {
        if self.preferences_repo.insert_if_absent(&Preferences::default()).await? {
            info!("Seeded default preferences");
        }
        Ok(())
    }

    pub async fn list_future_overrides(&self, from: NaiveDate) -> Result<Vec<DateOverride>, AppError> {
        self.override_repo.list_from(from).await
    }

    pub async fn resolve_public_availability(&self) -> Result<PublicAvailability, AppError> {
        let preferences = self.get_preferences().await?;
        let overrides = self.list_future_overrides(self.today()).await?;
        let date_overrides = resolve_public_overrides(&preferences, &overrides);
        Ok(PublicAvailability { preferences, date_overrides })
    }

    /// Snapshot with every override from today onwards.
    pub async fn snapshot(&self) -> Result<AvailabilitySnapshot, AppError> {
        let preferences = self.get_preferences().await?;
        let overrides = self.list_future_overrides(self.today()).await?;
        Ok(AvailabilitySnapshot::new(preferences, overrides))
    }

    pub async fn snapshot_for_range(&self, start: NaiveDate, end: NaiveDate) -> Result<AvailabilitySnapshot, AppError> {
        let preferences = self.get_preferences().await?;
        let overrides = self.override_repo.list_by_range(start, end).await?;
        Ok(AvailabilitySnapshot::new(preferences, overrides))
    }

    pub async fn save_preferences(&self, prefs: &Preferences) -> Result<Preferences, AppError> {
        let saved = self.preferences_repo.replace(prefs).await?;
        info!(
            default_spots = saved.default_spots,
            time_slots = saved.monthly_time_slots.len(),
            "Preferences replaced"
        );
        Ok(saved)
    }

    pub async fn upsert_override(&self, entity: &DateOverride) -> Result<DateOverride, AppError> {
        let saved = self.override_repo.upsert(entity).await?;
        info!(date = %saved.date, spots = ?saved.available_spots, "Upserted date override");
        Ok(saved)
    }

    pub async fn delete_override(&self, date: NaiveDate) -> Result<bool, AppError> {
        let removed = self.override_repo.delete(date).await?;
        info!(date = %date, removed, "Deleted date override");
        Ok(removed)
    }
}
