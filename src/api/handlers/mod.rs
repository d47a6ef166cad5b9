pub mod calendar;
pub mod health;
pub mod import;
pub mod instance_override;
pub mod template;
