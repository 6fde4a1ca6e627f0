use crate::license_review::policies::ApprovalPolicy;
use crate::ports::outbound::InputSource;

/// CheckRequest - Input of the license check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Where to read content ids from
    pub input: InputSource,
    /// Wildcard patterns of content ids to skip
    pub exclude_patterns: Vec<String>,
    /// Approved licenses and minimum score
    pub policy: ApprovalPolicy,
}

impl CheckRequest {
    pub fn new(input: InputSource, exclude_patterns: Vec<String>, policy: ApprovalPolicy) -> Self {
        Self {
            input,
            exclude_patterns,
            policy,
        }
    }
}
