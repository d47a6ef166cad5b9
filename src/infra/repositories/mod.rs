pub mod sqlite_event_repo;
pub mod sqlite_override_repo;
pub mod sqlite_template_repo;
