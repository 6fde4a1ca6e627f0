use crate::license_review::domain::{ContentId, ContentRecord};
use crate::ports::outbound::ContentDataRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingContentDataRepository wraps a ContentDataRepository with an
/// in-memory cache.
///
/// Decorator over any repository: only ids that have not been asked for
/// before reach the inner repository. Ids the service could not answer are
/// cached as misses, so they are not requested again either. The cache is
/// thread-safe and shared across clones of the `Arc`.
pub struct CachingContentDataRepository<R: ContentDataRepository> {
    inner: R,
    cache: Arc<DashMap<ContentId, Option<ContentRecord>>>,
}

impl<R: ContentDataRepository> CachingContentDataRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Number of ids with a cached answer (hit or miss)
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: ContentDataRepository> ContentDataRepository for CachingContentDataRepository<R> {
    async fn fetch_content_data(&self, ids: &[ContentId]) -> Result<Vec<ContentRecord>> {
        let uncached: Vec<ContentId> = ids
            .iter()
            .filter(|id| !self.cache.contains_key(*id))
            .cloned()
            .collect();

        let mut uncorrelated = Vec::new();
        if !uncached.is_empty() {
            let fetched = self.inner.fetch_content_data(&uncached).await?;

            for id in &uncached {
                self.cache.insert(id.clone(), None);
            }

            for record in fetched {
                match record.content_id() {
                    Ok(id) => {
                        self.cache.insert(id, Some(record));
                    }
                    // Not addressable by id; hand it through uncached
                    Err(_) => uncorrelated.push(record),
                }
            }
        }

        let mut records: Vec<ContentRecord> = ids
            .iter()
            .filter_map(|id| self.cache.get(id).and_then(|entry| entry.value().clone()))
            .collect();
        records.extend(uncorrelated);

        Ok(records)
    }
}
