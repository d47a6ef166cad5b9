pub mod ics;
pub mod import_applier;
pub mod override_resolver;
pub mod recurrence;
pub mod similarity;
