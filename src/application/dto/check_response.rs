use crate::license_review::domain::{ContentId, ReportMetadata, ReviewStatus, ReviewedContent};

/// CheckResponse - Output of the license check use case
#[derive(Debug, Clone)]
pub struct CheckResponse {
    /// Fetched records with the status the policy assigned (possibly unset)
    pub reviewed: Vec<ReviewedContent>,
    /// Valid ids ClearlyDefined had no harvested definition for
    pub unresolved: Vec<ContentId>,
    /// Input lines that are not valid content ids
    pub invalid_ids: Vec<String>,
    pub metadata: ReportMetadata,
}

impl CheckResponse {
    pub fn new(
        reviewed: Vec<ReviewedContent>,
        unresolved: Vec<ContentId>,
        invalid_ids: Vec<String>,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            reviewed,
            unresolved,
            invalid_ids,
            metadata,
        }
    }

    /// Number of reviewed records with the given status (`None` = unset)
    pub fn count_with_status(&self, status: Option<ReviewStatus>) -> usize {
        self.reviewed
            .iter()
            .filter(|content| content.status() == status)
            .count()
    }

    /// True when anything is not approved: restricted or unreviewed
    /// records, unresolved ids, or invalid input lines
    pub fn requires_review(&self) -> bool {
        !self.unresolved.is_empty()
            || !self.invalid_ids.is_empty()
            || self
                .reviewed
                .iter()
                .any(|content| content.status() != Some(ReviewStatus::Approved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_review::domain::ContentRecord;
    use crate::license_review::services::ReportGenerator;
    use serde_json::json;

    fn reviewed(status: Option<ReviewStatus>) -> ReviewedContent {
        let mut content = ReviewedContent::new(ContentRecord::new(
            "npm/npmjs/-/write/1.0.3",
            json!({ "scores": { "effective": 90 } }),
        ));
        content.set_status(status);
        content
    }

    fn response(
        reviewed: Vec<ReviewedContent>,
        unresolved: Vec<ContentId>,
        invalid_ids: Vec<String>,
    ) -> CheckResponse {
        CheckResponse::new(
            reviewed,
            unresolved,
            invalid_ids,
            ReportGenerator::generate_default_metadata(),
        )
    }

    #[test]
    fn test_all_approved_needs_no_review() {
        let r = response(vec![reviewed(Some(ReviewStatus::Approved))], vec![], vec![]);
        assert!(!r.requires_review());
    }

    #[test]
    fn test_restricted_needs_review() {
        let r = response(
            vec![
                reviewed(Some(ReviewStatus::Approved)),
                reviewed(Some(ReviewStatus::Restricted)),
            ],
            vec![],
            vec![],
        );
        assert!(r.requires_review());
        assert_eq!(r.count_with_status(Some(ReviewStatus::Restricted)), 1);
    }

    #[test]
    fn test_unset_status_needs_review() {
        let r = response(vec![reviewed(None)], vec![], vec![]);
        assert!(r.requires_review());
        assert_eq!(r.count_with_status(None), 1);
    }

    #[test]
    fn test_unresolved_needs_review() {
        let r = response(
            vec![],
            vec![ContentId::parse("npm/npmjs/-/left-pad/1.3.0").unwrap()],
            vec![],
        );
        assert!(r.requires_review());
    }

    #[test]
    fn test_invalid_ids_need_review() {
        let r = response(vec![], vec![], vec!["garbage".to_string()]);
        assert!(r.requires_review());
    }

    #[test]
    fn test_empty_response_needs_no_review() {
        assert!(!response(vec![], vec![], vec![]).requires_review());
    }
}
