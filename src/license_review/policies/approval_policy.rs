use crate::license_review::domain::{ContentRecord, ReviewStatus, ReviewedContent};
use std::collections::HashSet;

/// Minimum effective score accepted when none is configured
pub const DEFAULT_THRESHOLD: i64 = 60;

/// Licenses approved when none are configured
pub const DEFAULT_APPROVED_LICENSES: &[&str] = &[
    "Apache-2.0",
    "MIT",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "EPL-2.0",
    "ISC",
];

/// ApprovalPolicy assigns review statuses to fetched content records
///
/// Rules, applied to the record's license and effective score:
/// 1. score cannot be read → status stays unset, a warning is attached
/// 2. score >= threshold and license on the approved list → `Approved`
/// 3. anything else → `Restricted`
///
/// License expressions are compared as whole strings (ASCII
/// case-insensitive); `MIT OR Apache-2.0` is only approved if that exact
/// expression is on the list.
#[derive(Debug, Clone)]
pub struct ApprovalPolicy {
    approved_licenses: HashSet<String>,
    threshold: i64,
}

/// Result of reviewing one record
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub content: ReviewedContent,
    pub warning: Option<String>,
}

impl ApprovalPolicy {
    pub fn new<I, S>(approved_licenses: I, threshold: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            approved_licenses: approved_licenses
                .into_iter()
                .map(|l| normalize(l.as_ref()))
                .collect(),
            threshold,
        }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn is_approved_license(&self, license: &str) -> bool {
        self.approved_licenses.contains(&normalize(license))
    }

    /// Reviews one record, returning it with its status assigned
    pub fn review(&self, record: ContentRecord) -> ReviewOutcome {
        let mut content = ReviewedContent::new(record);

        let score = match content.score() {
            Ok(score) => score,
            Err(e) => {
                return ReviewOutcome {
                    content,
                    warning: Some(e.to_string()),
                }
            }
        };

        let license_ok = content
            .license()
            .is_some_and(|license| self.is_approved_license(license));

        let status = if license_ok && score >= self.threshold {
            ReviewStatus::Approved
        } else {
            ReviewStatus::Restricted
        };
        content.set_status(Some(status));

        ReviewOutcome {
            content,
            warning: None,
        }
    }
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVED_LICENSES.iter(), DEFAULT_THRESHOLD)
    }
}

fn normalize(license: &str) -> String {
    license.trim().to_ascii_lowercase()
}
