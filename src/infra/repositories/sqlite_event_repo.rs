use crate::domain::{models::calendar_event::CalendarEvent, ports::CalendarEventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDate;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl CalendarEventRepository for SqliteEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            r#"INSERT INTO calendar_events (id, household_id, title, category, start_date, start_time, end_time, participants_json, transportation, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&event.id)
            .bind(&event.household_id)
            .bind(&event.title)
            .bind(&event.category)
            .bind(event.start_date)
            .bind(&event.start_time)
            .bind(&event.end_time)
            .bind(&event.participants_json)
            .bind(&event.transportation)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, household_id: &str, id: &str) -> Result<Option<CalendarEvent>, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "SELECT * FROM calendar_events WHERE household_id = ? AND id = ?"
        )
            .bind(household_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, household_id: &str) -> Result<Vec<CalendarEvent>, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "SELECT * FROM calendar_events WHERE household_id = ? ORDER BY start_date"
        )
            .bind(household_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, household_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "SELECT * FROM calendar_events WHERE household_id = ? AND start_date >= ? AND start_date <= ? ORDER BY start_date"
        )
            .bind(household_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            r#"UPDATE calendar_events SET
               title = ?, category = ?, start_date = ?, start_time = ?, end_time = ?,
               participants_json = ?, transportation = ?
               WHERE household_id = ? AND id = ?
               RETURNING *"#
        )
            .bind(&event.title)
            .bind(&event.category)
            .bind(event.start_date)
            .bind(&event.start_time)
            .bind(&event.end_time)
            .bind(&event.participants_json)
            .bind(&event.transportation)
            .bind(&event.household_id)
            .bind(&event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, household_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM calendar_events WHERE household_id = ? AND id = ?")
            .bind(household_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}
