pub mod content_id;
pub mod content_record;
pub mod document_path;
pub mod report_metadata;
pub mod review_status;

pub use content_id::ContentId;
pub use content_record::{ContentRecord, ReviewedContent, CLEARLYDEFINED_AUTHORITY};
pub use report_metadata::ReportMetadata;
pub use review_status::ReviewStatus;
