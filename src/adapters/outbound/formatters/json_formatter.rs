use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the read model as pretty-printed JSON
///
/// Unset statuses serialize as `"unknown"`; a missing license or unreadable
/// score serializes as `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ContentView, ReportMetadataView, ReportSummary};
    use crate::license_review::domain::ReviewStatus;
    use serde_json::Value;

    fn create_test_read_model() -> ReportReadModel {
        ReportReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-15T10:30:00Z".to_string(),
                tool_name: "cd-license-check".to_string(),
                tool_version: "0.1.0".to_string(),
                serial_number: "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
            },
            summary: ReportSummary {
                total: 3,
                approved: 1,
                unreviewed: 1,
                unresolved: 1,
                ..ReportSummary::default()
            },
            contents: vec![
                ContentView {
                    id: "npm/npmjs/-/broken/0.1.0".to_string(),
                    license: None,
                    score: None,
                    authority: "clearlydefined".to_string(),
                    status: None,
                },
                ContentView {
                    id: "npm/npmjs/-/write/1.0.3".to_string(),
                    license: Some("MIT".to_string()),
                    score: Some(97),
                    authority: "clearlydefined".to_string(),
                    status: Some(ReviewStatus::Approved),
                },
            ],
            unresolved: vec!["npm/npmjs/-/ghost/0.0.1".to_string()],
            invalid_ids: vec![],
        }
    }

    #[test]
    fn test_format_is_valid_json() {
        let output = JsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["metadata"]["tool_name"], "cd-license-check");
        assert_eq!(parsed["summary"]["approved"], 1);
        assert_eq!(parsed["unresolved"][0], "npm/npmjs/-/ghost/0.0.1");
    }

    #[test]
    fn test_format_content_fields() {
        let output = JsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        let write = &parsed["contents"][1];
        assert_eq!(write["id"], "npm/npmjs/-/write/1.0.3");
        assert_eq!(write["license"], "MIT");
        assert_eq!(write["score"], 97);
        assert_eq!(write["authority"], "clearlydefined");
        assert_eq!(write["status"], "approved");
    }

    #[test]
    fn test_format_unset_values() {
        let output = JsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        let broken = &parsed["contents"][0];
        assert!(broken["license"].is_null());
        assert!(broken["score"].is_null());
        assert_eq!(broken["status"], "unknown");
    }
}
