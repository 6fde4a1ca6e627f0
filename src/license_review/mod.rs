//! License review domain: content identifiers, ClearlyDefined content
//! records, review statuses and the policies that assign them.
pub mod domain;
pub mod policies;
pub mod services;
