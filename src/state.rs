use std::sync::Arc;
use crate::domain::ports::{
    CalendarEventRepository, EventTemplateRepository, InstanceOverrideRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub template_repo: Arc<dyn EventTemplateRepository>,
    pub override_repo: Arc<dyn InstanceOverrideRepository>,
    pub event_repo: Arc<dyn CalendarEventRepository>,
}
