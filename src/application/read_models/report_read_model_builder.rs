//! Builder for constructing ReportReadModel from a check response

use super::content_view::ContentView;
use super::report_read_model::{ReportMetadataView, ReportReadModel, ReportSummary};
use crate::application::dto::CheckResponse;
use crate::license_review::domain::{ReportMetadata, ReviewStatus, ReviewedContent};

/// Builds the read model formatters render
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(response: &CheckResponse) -> ReportReadModel {
        let mut contents: Vec<ContentView> =
            response.reviewed.iter().map(Self::build_content).collect();
        contents.sort_by(|a, b| a.id.cmp(&b.id));

        let mut unresolved: Vec<String> =
            response.unresolved.iter().map(ToString::to_string).collect();
        unresolved.sort();

        ReportReadModel {
            metadata: Self::build_metadata(&response.metadata),
            summary: Self::build_summary(response),
            contents,
            unresolved,
            invalid_ids: response.invalid_ids.clone(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().to_string(),
        }
    }

    fn build_content(content: &ReviewedContent) -> ContentView {
        let id = content
            .content_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|_| content.identifier().to_string());

        ContentView {
            id,
            license: content.license().map(str::to_string),
            score: content.score().ok(),
            authority: content.authority().to_string(),
            status: content.status(),
        }
    }

    fn build_summary(response: &CheckResponse) -> ReportSummary {
        let approved = response.count_with_status(Some(ReviewStatus::Approved));
        let restricted = response.count_with_status(Some(ReviewStatus::Restricted));
        let unreviewed = response.count_with_status(None);

        ReportSummary {
            total: response.reviewed.len() + response.unresolved.len() + response.invalid_ids.len(),
            approved,
            restricted,
            unreviewed,
            unresolved: response.unresolved.len(),
            invalid: response.invalid_ids.len(),
        }
    }
}
