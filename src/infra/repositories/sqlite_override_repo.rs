use crate::domain::{models::instance_override::InstanceOverride, ports::InstanceOverrideRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDate;

pub struct SqliteOverrideRepo {
    pool: SqlitePool,
}

impl SqliteOverrideRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl InstanceOverrideRepository for SqliteOverrideRepo {
    async fn upsert(&self, entity: &InstanceOverride) -> Result<InstanceOverride, AppError> {
        sqlx::query_as::<_, InstanceOverride>(
            r#"INSERT INTO instance_overrides (id, template_id, date, participants_json, transportation, cancelled, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(template_id, date) DO UPDATE SET
               participants_json=excluded.participants_json,
               transportation=excluded.transportation,
               cancelled=excluded.cancelled,
               created_at=excluded.created_at
               RETURNING *"#
        )
            .bind(&entity.id)
            .bind(&entity.template_id)
            .bind(entity.date)
            .bind(&entity.participants_json)
            .bind(&entity.transportation)
            .bind(entity.cancelled)
            .bind(entity.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, template_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<InstanceOverride>, AppError> {
        sqlx::query_as::<_, InstanceOverride>(
            "SELECT * FROM instance_overrides WHERE template_id = ? AND date >= ? AND date <= ? ORDER BY date"
        )
            .bind(template_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, template_id: &str, date: NaiveDate) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM instance_overrides WHERE template_id = ? AND date = ?")
            .bind(template_id)
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Override not found".into()));
        }
        Ok(())
    }
}
