use super::content_id::ContentId;
use super::document_path::{display_path, lookup};
use super::review_status::ReviewStatus;
use crate::shared::error::LicenseCheckError;
use crate::shared::Result;
use serde_json::Value;

/// Label identifying ClearlyDefined as the source of a record
pub const CLEARLYDEFINED_AUTHORITY: &str = "clearlydefined";

const DECLARED_LICENSE_PATH: &[&str] = &["licensed", "declared"];
const EFFECTIVE_SCORE_PATH: &[&str] = &["scores", "effective"];

/// One definition answered by the ClearlyDefined service.
///
/// The document is kept exactly as returned (abridged):
///
/// ```text
/// {
///   "coordinates": { "type": "npm", "provider": "npmjs", "name": "write", "revision": "1.0.3" },
///   "licensed": {
///     "declared": "MIT",
///     "facets": { "core": { "discovered": { "expressions": ["MIT"] } } },
///     "score": { "total": 94 },
///     "toolScore": { "total": 94 }
///   },
///   "scores": { "effective": 97, "tool": 97 }
/// }
/// ```
///
/// Only `licensed.declared` and `scores.effective` are read. The service
/// does not promise a declared license, so its absence yields `None`; it
/// does promise an effective score, so a missing one is reported as
/// [`LicenseCheckError::MalformedDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    identifier: String,
    document: Value,
}

impl ContentRecord {
    pub fn new(identifier: impl Into<String>, document: Value) -> Self {
        Self {
            identifier: identifier.into(),
            document,
        }
    }

    /// The coordinate string this record was answered for
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// License expression at `licensed.declared`, if present and a string
    pub fn declared_license(&self) -> Option<&str> {
        lookup(&self.document, DECLARED_LICENSE_PATH).and_then(Value::as_str)
    }

    /// The license of this content.
    ///
    /// Reports the declared license only; licenses discovered in the
    /// content's files are not merged in.
    pub fn license(&self) -> Option<&str> {
        self.declared_license()
    }

    /// Integer at `scores.effective`.
    ///
    /// # Errors
    /// [`LicenseCheckError::MalformedDocument`] when `scores` or `effective`
    /// is absent, or the value is not an integer.
    pub fn effective_score(&self) -> std::result::Result<i64, LicenseCheckError> {
        let value = lookup(&self.document, EFFECTIVE_SCORE_PATH)
            .ok_or_else(|| self.malformed(EFFECTIVE_SCORE_PATH, "is missing".to_string()))?;

        value.as_i64().ok_or_else(|| {
            self.malformed(
                EFFECTIVE_SCORE_PATH,
                format!("is not an integer (found {})", value),
            )
        })
    }

    /// Alias for [`ContentRecord::effective_score`]
    pub fn score(&self) -> std::result::Result<i64, LicenseCheckError> {
        self.effective_score()
    }

    /// Canonical id of this content, parsed from the identifier
    pub fn content_id(&self) -> Result<ContentId> {
        ContentId::parse(&self.identifier)
    }

    pub fn authority(&self) -> &'static str {
        CLEARLYDEFINED_AUTHORITY
    }

    fn malformed(&self, path: &[&str], details: String) -> LicenseCheckError {
        LicenseCheckError::MalformedDocument {
            identifier: self.identifier.clone(),
            field: display_path(path),
            details,
        }
    }
}

/// A [`ContentRecord`] paired with the status a reviewer assigned to it.
///
/// The record stays an immutable snapshot; only the status cell changes.
/// The status starts unset and may be overwritten any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewedContent {
    record: ContentRecord,
    status: Option<ReviewStatus>,
}

impl ReviewedContent {
    pub fn new(record: ContentRecord) -> Self {
        Self {
            record,
            status: None,
        }
    }

    pub fn record(&self) -> &ContentRecord {
        &self.record
    }

    pub fn set_status(&mut self, status: Option<ReviewStatus>) {
        self.status = status;
    }

    pub fn status(&self) -> Option<ReviewStatus> {
        self.status
    }

    pub fn identifier(&self) -> &str {
        self.record.identifier()
    }

    pub fn declared_license(&self) -> Option<&str> {
        self.record.declared_license()
    }

    pub fn license(&self) -> Option<&str> {
        self.record.license()
    }

    pub fn effective_score(&self) -> std::result::Result<i64, LicenseCheckError> {
        self.record.effective_score()
    }

    pub fn score(&self) -> std::result::Result<i64, LicenseCheckError> {
        self.record.score()
    }

    pub fn content_id(&self) -> Result<ContentId> {
        self.record.content_id()
    }

    pub fn authority(&self) -> &'static str {
        self.record.authority()
    }
}

impl From<ContentRecord> for ReviewedContent {
    fn from(record: ContentRecord) -> Self {
        Self::new(record)
    }
}
