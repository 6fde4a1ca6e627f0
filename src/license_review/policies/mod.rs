pub mod approval_policy;

pub use approval_policy::{ApprovalPolicy, ReviewOutcome, DEFAULT_APPROVED_LICENSES, DEFAULT_THRESHOLD};
