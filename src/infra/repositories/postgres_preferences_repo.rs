use super::{decode_preferences, encode_preferences};
use crate::domain::{models::preferences::{Preferences, PreferencesRow}, ports::PreferencesRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPreferencesRepo {
    pool: PgPool,
}

impl PostgresPreferencesRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl PreferencesRepository for PostgresPreferencesRepo {
    async fn find(&self) -> Result<Option<Preferences>, AppError> {
        let row = sqlx::query_as::<_, PreferencesRow>("SELECT * FROM preferences WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.map(decode_preferences).transpose()
    }

    async fn replace(&self, prefs: &Preferences) -> Result<Preferences, AppError> {
        let row = encode_preferences(prefs)?;
        let saved = sqlx::query_as::<_, PreferencesRow>(
            r#"INSERT INTO preferences (id, season_start_month, season_start_day, season_end_month, season_end_day, available_days_json, default_spots, monthly_time_slots_json, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               ON CONFLICT(id) DO UPDATE SET
               season_start_month=excluded.season_start_month,
               season_start_day=excluded.season_start_day,
               season_end_month=excluded.season_end_month,
               season_end_day=excluded.season_end_day,
               available_days_json=excluded.available_days_json,
               default_spots=excluded.default_spots,
               monthly_time_slots_json=excluded.monthly_time_slots_json,
               updated_at=excluded.updated_at
               RETURNING *"#
        )
            .bind(row.id)
            .bind(row.season_start_month)
            .bind(row.season_start_day)
            .bind(row.season_end_month)
            .bind(row.season_end_day)
            .bind(&row.available_days_json)
            .bind(row.default_spots)
            .bind(&row.monthly_time_slots_json)
            .bind(row.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        decode_preferences(saved)
    }

    async fn insert_if_absent(&self, prefs: &Preferences) -> Result<bool, AppError> {
        let row = encode_preferences(prefs)?;
        let res = sqlx::query(
            r#"INSERT INTO preferences (id, season_start_month, season_start_day, season_end_month, season_end_day, available_days_json, default_spots, monthly_time_slots_json, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               ON CONFLICT(id) DO NOTHING"#
        )
            .bind(row.id)
            .bind(row.season_start_month)
            .bind(row.season_start_day)
            .bind(row.season_end_month)
            .bind(row.season_end_day)
            .bind(&row.available_days_json)
            .bind(row.default_spots)
            .bind(&row.monthly_time_slots_json)
            .bind(row.updated_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(res.rows_affected() > 0)
    }
}
