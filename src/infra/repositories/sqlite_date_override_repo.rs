use crate::domain::{models::date_override::DateOverride, ports::DateOverrideRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDate;

pub struct SqliteDateOverrideRepo {
    pool: SqlitePool,
}

impl SqliteDateOverrideRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl DateOverrideRepository for SqliteDateOverrideRepo {
    async fn upsert(&self, entity: &DateOverride) -> Result<DateOverride, AppError> {
        sqlx::query_as::<_, DateOverride>(
            r#"INSERT INTO date_overrides (date, available_spots, note, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT(date) DO UPDATE SET
               available_spots=excluded.available_spots,
               note=excluded.note,
               updated_at=excluded.updated_at
               RETURNING *"#
        )
            .bind(entity.date)
            .bind(entity.available_spots)
            .bind(&entity.note)
            .bind(entity.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_from(&self, from: NaiveDate) -> Result<Vec<DateOverride>, AppError> {
        sqlx::query_as::<_, DateOverride>(
            "SELECT * FROM date_overrides WHERE date >= ? ORDER BY date ASC"
        )
            .bind(from)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DateOverride>, AppError> {
        sqlx::query_as::<_, DateOverride>(
            "SELECT * FROM date_overrides WHERE date >= ? AND date <= ? ORDER BY date ASC"
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, date: NaiveDate) -> Result<bool, AppError> {
        let res = sqlx::query("DELETE FROM date_overrides WHERE date = ?")
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(res.rows_affected() > 0)
    }
}
