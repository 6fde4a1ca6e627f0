use serde::Serialize;
use std::fmt;

/// Outcome a reviewer assigns to a content record.
///
/// The unset state is `Option::None` on [`ReviewedContent`]; there is no
/// `Unknown` variant so that "not reviewed yet" cannot be mistaken for a
/// decision.
///
/// [`ReviewedContent`]: super::ReviewedContent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Restricted,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Restricted => "restricted",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
