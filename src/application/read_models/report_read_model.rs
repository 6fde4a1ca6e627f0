//! Report read model consumed by formatters

use super::content_view::ContentView;
use serde::Serialize;

/// Denormalized view of one license check run
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub summary: ReportSummary,
    /// Reviewed content, sorted by id
    pub contents: Vec<ContentView>,
    /// Ids without a harvested ClearlyDefined definition, sorted
    pub unresolved: Vec<String>,
    /// Input lines that are not content ids, in input order
    pub invalid_ids: Vec<String>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub serial_number: String,
}

/// Counts per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub approved: usize,
    pub restricted: usize,
    pub unreviewed: usize,
    pub unresolved: usize,
    pub invalid: usize,
}

impl ReportSummary {
    /// True when every checked id ended up approved
    pub fn all_approved(&self) -> bool {
        self.restricted == 0 && self.unreviewed == 0 && self.unresolved == 0 && self.invalid == 0
    }
}
