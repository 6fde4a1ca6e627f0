use crate::license_review::domain::document_path::lookup;
use crate::license_review::domain::{ContentId, ContentRecord};
use crate::ports::outbound::ContentDataRepository;
use crate::shared::error::LicenseCheckError;
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::{Map, Value};
use std::time::Duration;

/// Public ClearlyDefined API
pub const DEFAULT_BASE_URL: &str = "https://api.clearlydefined.io";

/// Default number of coordinates sent per request
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of batches in flight at once
const MAX_CONCURRENT_BATCHES: usize = 4;

/// Connection settings for [`ClearlyDefinedRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub batch_size: usize,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// ClearlyDefinedRepository adapter for the ClearlyDefined definitions API
///
/// Sends coordinates in batches to `POST {base_url}/definitions`, which
/// answers with an object keyed by coordinate. Each answered definition
/// becomes one [`ContentRecord`].
///
/// ClearlyDefined answers every coordinate, including content it has never
/// harvested. Such placeholder definitions carry no `described.tools` and
/// are dropped, so the caller sees them as unresolved.
#[derive(Debug)]
pub struct ClearlyDefinedRepository {
    client: reqwest::Client,
    definitions_url: String,
    batch_size: usize,
    max_retries: u32,
}

impl ClearlyDefinedRepository {
    /// Creates a repository for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if !(config.base_url.starts_with("https://") || config.base_url.starts_with("http://")) {
            return Err(LicenseCheckError::Validation {
                message: format!(
                    "ClearlyDefined URL must start with http:// or https://, got '{}'",
                    config.base_url
                ),
            }
            .into());
        }

        if config.batch_size == 0 {
            return Err(LicenseCheckError::Validation {
                message: "Batch size must be at least 1".to_string(),
            }
            .into());
        }

        let user_agent = format!("cd-license-check/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            definitions_url: format!("{}/definitions", config.base_url.trim_end_matches('/')),
            batch_size: config.batch_size,
            max_retries: 3,
        })
    }

    pub fn definitions_url(&self) -> &str {
        &self.definitions_url
    }

    /// Fetches one batch, retrying with a linear backoff
    async fn fetch_batch_with_retry(&self, batch: &[ContentId]) -> Result<Vec<ContentRecord>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_batch(batch).await {
                Ok(records) => return Ok(records),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No request attempts were made")))
    }

    async fn fetch_batch(&self, batch: &[ContentId]) -> Result<Vec<ContentRecord>> {
        let coordinates: Vec<String> = batch.iter().map(ContentId::to_string).collect();

        let response = self
            .client
            .post(&self.definitions_url)
            .json(&coordinates)
            .send()
            .await
            .map_err(|e| LicenseCheckError::ServiceError {
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(LicenseCheckError::ServiceError {
                details: format!("API returned status code {}", response.status()),
            }
            .into());
        }

        let definitions: Map<String, Value> =
            response
                .json()
                .await
                .map_err(|e| LicenseCheckError::ServiceError {
                    details: format!("Failed to parse definitions response: {}", e),
                })?;

        Ok(records_from_definitions(definitions))
    }
}

/// Converts a definitions response into records, skipping unharvested content
pub(crate) fn records_from_definitions(definitions: Map<String, Value>) -> Vec<ContentRecord> {
    definitions
        .into_iter()
        .filter(|(_, definition)| is_harvested(definition))
        .map(|(coordinate, definition)| ContentRecord::new(coordinate, definition))
        .collect()
}

fn is_harvested(definition: &Value) -> bool {
    lookup(definition, &["described", "tools"])
        .and_then(Value::as_array)
        .is_some_and(|tools| !tools.is_empty())
}

#[async_trait]
impl ContentDataRepository for ClearlyDefinedRepository {
    async fn fetch_content_data(&self, ids: &[ContentId]) -> Result<Vec<ContentRecord>> {
        let chunks: Vec<Vec<ContentId>> = ids
            .chunks(self.batch_size)
            .map(<[ContentId]>::to_vec)
            .collect();

        let batches: Vec<Vec<ContentRecord>> = stream::iter(chunks)
            .map(|batch| async move { self.fetch_batch_with_retry(&batch).await })
            .buffered(MAX_CONCURRENT_BATCHES)
            .try_collect()
            .await?;

        Ok(batches.into_iter().flatten().collect())
    }
}
