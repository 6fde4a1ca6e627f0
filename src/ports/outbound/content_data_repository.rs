use crate::license_review::domain::{ContentId, ContentRecord};
use crate::shared::Result;
use async_trait::async_trait;

/// ContentDataRepository port for fetching license metadata
///
/// Abstracts the external service (ClearlyDefined) that answers content
/// ids with definition documents.
///
/// # Async Support
/// Implementations must be `Send + Sync` so batches can be fetched
/// concurrently.
#[async_trait]
pub trait ContentDataRepository: Send + Sync {
    /// Fetches one record per id the service knows about
    ///
    /// Ids the service cannot answer are left out of the result rather
    /// than reported as errors; callers correlate records back to ids with
    /// [`ContentRecord::content_id`].
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The service returns an error status code
    /// - The response cannot be parsed
    async fn fetch_content_data(&self, ids: &[ContentId]) -> Result<Vec<ContentRecord>>;
}
