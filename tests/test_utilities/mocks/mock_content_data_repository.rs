use async_trait::async_trait;
use cd_license_check::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ContentDataRepository answering from an in-memory definition map
///
/// Ids without a definition are left out of the answer, the way
/// unharvested content is.
#[derive(Default)]
pub struct MockContentDataRepository {
    pub definitions: HashMap<String, Value>,
    pub should_fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl MockContentDataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition with a declared license and an effective score
    pub fn with_definition(self, coordinate: &str, license: &str, score: i64) -> Self {
        self.with_document(
            coordinate,
            json!({
                "described": { "tools": ["clearlydefined/1.3.4"] },
                "licensed": { "declared": license },
                "scores": { "effective": score, "tool": score }
            }),
        )
    }

    pub fn with_document(mut self, coordinate: &str, document: Value) -> Self {
        self.definitions.insert(coordinate.to_string(), document);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentDataRepository for MockContentDataRepository {
    async fn fetch_content_data(&self, ids: &[ContentId]) -> Result<Vec<ContentRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock ClearlyDefined failure");
        }

        Ok(ids
            .iter()
            .filter_map(|id| {
                let coordinate = id.to_string();
                self.definitions
                    .get(&coordinate)
                    .map(|doc| ContentRecord::new(coordinate, doc.clone()))
            })
            .collect())
    }
}
