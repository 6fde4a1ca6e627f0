use crate::application::dto::{CheckRequest, CheckResponse};
use crate::license_review::domain::{ContentId, ContentRecord, ReviewedContent};
use crate::license_review::policies::ApprovalPolicy;
use crate::license_review::services::{ContentFilter, ReportGenerator};
use crate::ports::outbound::{ContentDataRepository, ContentIdReader, ProgressReporter};
use crate::shared::Result;
use std::collections::HashSet;

/// CheckLicensesUseCase - Core use case for reviewing content licenses
///
/// Reads content ids, drops excluded ones, fetches their ClearlyDefined
/// definitions and lets the approval policy assign a status to each.
///
/// # Type Parameters
/// * `R` - ContentIdReader implementation
/// * `C` - ContentDataRepository implementation
/// * `P` - ProgressReporter implementation
pub struct CheckLicensesUseCase<R, C, P> {
    id_reader: R,
    content_repository: C,
    progress_reporter: P,
}

impl<R, C, P> CheckLicensesUseCase<R, C, P>
where
    R: ContentIdReader,
    C: ContentDataRepository,
    P: ProgressReporter,
{
    pub fn new(id_reader: R, content_repository: C, progress_reporter: P) -> Self {
        Self {
            id_reader,
            content_repository,
            progress_reporter,
        }
    }

    /// Executes the license check
    ///
    /// Invalid input lines and ids without a definition do not fail the
    /// run; they are listed in the response instead.
    ///
    /// # Errors
    /// - The input cannot be read
    /// - An exclusion pattern is invalid, or the patterns exclude every id
    /// - ClearlyDefined cannot be reached
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        // Step 1: Read raw ids
        self.progress_reporter
            .report(&format!("📖 Reading content ids from: {}", request.input));

        let raw_ids = self.id_reader.read_content_ids(&request.input)?;

        // Step 2: Parse and deduplicate
        let (ids, invalid_ids) = self.parse_ids(raw_ids);
        self.progress_reporter
            .report(&format!("✅ Detected {} content id(s)", ids.len()));

        // Step 3: Apply exclusion filters
        let ids = self.apply_filters(ids, request.exclude_patterns)?;

        // Step 4: Fetch definitions
        let records = if ids.is_empty() {
            Vec::new()
        } else {
            self.progress_reporter.report(&format!(
                "🔍 Fetching {} definition(s) from ClearlyDefined...",
                ids.len()
            ));
            self.content_repository.fetch_content_data(&ids).await?
        };

        // Step 5: Find ids nobody answered for
        let unresolved = Self::unresolved_ids(&ids, &records);
        for id in &unresolved {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No harvested definition found for {}",
                id
            ));
        }

        // Step 6: Review
        let reviewed = self.review_records(records, &request.policy);

        Ok(CheckResponse::new(
            reviewed,
            unresolved,
            invalid_ids,
            ReportGenerator::generate_default_metadata(),
        ))
    }

    /// Splits raw ids into parsed, deduplicated ids and invalid lines.
    ///
    /// The first occurrence of an id wins; Maven and coordinate notation of
    /// the same artifact count as duplicates.
    fn parse_ids(&self, raw_ids: Vec<String>) -> (Vec<ContentId>, Vec<String>) {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        let mut invalid = Vec::new();

        for raw in raw_ids {
            match ContentId::parse(&raw) {
                Ok(id) => {
                    if seen.insert(id.clone()) {
                        ids.push(id);
                    }
                }
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("⚠️  Warning: Skipping '{}': {}", raw, e));
                    invalid.push(raw);
                }
            }
        }

        (ids, invalid)
    }

    fn apply_filters(
        &self,
        ids: Vec<ContentId>,
        exclude_patterns: Vec<String>,
    ) -> Result<Vec<ContentId>> {
        if exclude_patterns.is_empty() {
            return Ok(ids);
        }

        let filter = ContentFilter::new(exclude_patterns)?;
        let original_count = ids.len();
        let filtered = filter.filter_ids(ids);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} content id(s) based on filters",
                excluded_count
            ));
        }

        if filtered.is_empty() && original_count > 0 {
            anyhow::bail!(
                "All {} content id(s) were excluded by the provided filters. \
                 Nothing would be checked. Please adjust your exclusion patterns.",
                original_count
            );
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any content ids.",
                pattern
            ));
        }

        Ok(filtered)
    }

    fn unresolved_ids(ids: &[ContentId], records: &[ContentRecord]) -> Vec<ContentId> {
        let answered: HashSet<ContentId> = records
            .iter()
            .filter_map(|record| record.content_id().ok())
            .collect();

        ids.iter()
            .filter(|id| !answered.contains(*id))
            .cloned()
            .collect()
    }

    fn review_records(
        &self,
        records: Vec<ContentRecord>,
        policy: &ApprovalPolicy,
    ) -> Vec<ReviewedContent> {
        let total = records.len();
        let mut reviewed = Vec::with_capacity(total);

        for (idx, record) in records.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(record.identifier()));

            let outcome = policy.review(record);
            if let Some(warning) = &outcome.warning {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", warning));
            }
            reviewed.push(outcome.content);
        }

        if total > 0 {
            self.progress_reporter.report_completion(&format!(
                "✅ License review complete: {} record(s) reviewed",
                total
            ));
        }

        reviewed
    }
}
