use serde::Serialize;

use crate::domain::models::import::{Conflict, UploadedEvent};

#[derive(Serialize)]
pub struct ImportPreviewResponse {
    pub conflicts: Vec<Conflict>,
    pub unmatched: Vec<UploadedEvent>,
}
