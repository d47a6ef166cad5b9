use crate::domain::models::{
    calendar_event::CalendarEvent, instance_override::InstanceOverride, template::EventTemplate,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait EventTemplateRepository: Send + Sync {
    async fn create(&self, template: &EventTemplate) -> Result<EventTemplate, AppError>;
    async fn find_by_id(&self, household_id: &str, id: &str) -> Result<Option<EventTemplate>, AppError>;
    async fn list(&self, household_id: &str) -> Result<Vec<EventTemplate>, AppError>;
    async fn update(&self, template: &EventTemplate) -> Result<EventTemplate, AppError>;
    async fn delete(&self, household_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait InstanceOverrideRepository: Send + Sync {
    async fn upsert(&self, entity: &InstanceOverride) -> Result<InstanceOverride, AppError>;
    async fn list_by_range(&self, template_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<InstanceOverride>, AppError>;
    async fn delete(&self, template_id: &str, date: NaiveDate) -> Result<(), AppError>;
}

#[async_trait]
pub trait CalendarEventRepository: Send + Sync {
    async fn insert(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError>;
    async fn find_by_id(&self, household_id: &str, id: &str) -> Result<Option<CalendarEvent>, AppError>;
    async fn list(&self, household_id: &str) -> Result<Vec<CalendarEvent>, AppError>;
    async fn list_by_range(&self, household_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>, AppError>;
    async fn update(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError>;
    async fn delete(&self, household_id: &str, id: &str) -> Result<(), AppError>;
}
