pub mod calendar_event;
pub mod import;
pub mod instance_override;
pub mod occurrence;
pub mod template;
