use crate::license_review::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name recorded in report metadata
pub const TOOL_NAME: &str = "cd-license-check";

/// ReportGenerator service for stamping license reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates metadata with the current RFC 3339 timestamp and a fresh
    /// `urn:uuid:` serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Metadata naming this tool at its compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
