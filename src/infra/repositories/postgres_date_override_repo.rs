use crate::domain::{models::date_override::DateOverride, ports::DateOverrideRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::NaiveDate;

pub struct PostgresDateOverrideRepo {
    pool: PgPool,
}

impl PostgresDateOverrideRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl DateOverrideRepository for PostgresDateOverrideRepo {
    async fn upsert(&self, entity: &DateOverride) -> Result<DateOverride, AppError> {
        sqlx::query_as::<_, DateOverride>(
            r#"INSERT INTO date_overrides (date, available_spots, note, updated_at)
               VALUES ($1, $2, $3, $4)
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
            "SELECT * FROM date_overrides WHERE date >= $1 ORDER BY date ASC"
        )
            .bind(from)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DateOverride>, AppError> {
        sqlx::query_as::<_, DateOverride>(
            "SELECT * FROM date_overrides WHERE date >= $1 AND date <= $2 ORDER BY date ASC"
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, date: NaiveDate) -> Result<bool, AppError> {
        let res = sqlx::query("DELETE FROM date_overrides WHERE date = $1")
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(res.rows_affected() > 0)
    }
}
