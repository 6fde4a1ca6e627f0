//! Per-content view for the report

use crate::license_review::domain::ReviewStatus;
use serde::{Serialize, Serializer};

/// View representation of one reviewed content record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentView {
    /// Canonical coordinate, or the raw identifier if it does not parse
    pub id: String,
    /// Declared license expression
    pub license: Option<String>,
    /// Effective score; absent when the document is malformed
    pub score: Option<i64>,
    pub authority: String,
    /// Assigned status; serialized as `unknown` when the record could not be reviewed
    #[serde(serialize_with = "serialize_status")]
    pub status: Option<ReviewStatus>,
}

fn serialize_status<S: Serializer>(
    status: &Option<ReviewStatus>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match status {
        Some(status) => status.serialize(serializer),
        None => serializer.serialize_str("unknown"),
    }
}
