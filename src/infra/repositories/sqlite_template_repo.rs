use crate::domain::{models::template::EventTemplate, ports::EventTemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTemplateRepo {
    pool: SqlitePool,
}

impl SqliteTemplateRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl EventTemplateRepository for SqliteTemplateRepo {
    async fn create(&self, template: &EventTemplate) -> Result<EventTemplate, AppError> {
        sqlx::query_as::<_, EventTemplate>(
            r#"INSERT INTO event_templates (id, household_id, title, category, slots_json, participants_json, transportation, start_date, end_date, color, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&template.id)
            .bind(&template.household_id)
            .bind(&template.title)
            .bind(&template.category)
            .bind(&template.slots_json)
            .bind(&template.participants_json)
            .bind(&template.transportation)
            .bind(template.start_date)
            .bind(template.end_date)
            .bind(&template.color)
            .bind(template.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, household_id: &str, id: &str) -> Result<Option<EventTemplate>, AppError> {
        sqlx::query_as::<_, EventTemplate>(
            "SELECT * FROM event_templates WHERE household_id = ? AND id = ?"
        )
            .bind(household_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, household_id: &str) -> Result<Vec<EventTemplate>, AppError> {
        sqlx::query_as::<_, EventTemplate>(
            "SELECT * FROM event_templates WHERE household_id = ? ORDER BY created_at"
        )
            .bind(household_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, template: &EventTemplate) -> Result<EventTemplate, AppError> {
        sqlx::query_as::<_, EventTemplate>(
            r#"UPDATE event_templates SET
               title = ?, category = ?, slots_json = ?, participants_json = ?,
               transportation = ?, start_date = ?, end_date = ?, color = ?
               WHERE household_id = ? AND id = ?
               RETURNING *"#
        )
            .bind(&template.title)
            .bind(&template.category)
            .bind(&template.slots_json)
            .bind(&template.participants_json)
            .bind(&template.transportation)
            .bind(template.start_date)
            .bind(template.end_date)
            .bind(&template.color)
            .bind(&template.household_id)
            .bind(&template.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, household_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM event_templates WHERE household_id = ? AND id = ?")
            .bind(household_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Template not found".into()));
        }
        Ok(())
    }
}
