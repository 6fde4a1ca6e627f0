pub mod content_filter;
pub mod report_generator;

pub use content_filter::ContentFilter;
pub use report_generator::ReportGenerator;
