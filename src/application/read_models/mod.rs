//! Read models for report output
//!
//! Flattened, presentation-ready views of a [`CheckResponse`] that the
//! formatters consume without touching domain objects.
//!
//! [`CheckResponse`]: crate::application::dto::CheckResponse

mod content_view;
mod report_read_model;
mod report_read_model_builder;

pub use content_view::ContentView;
pub use report_read_model::{ReportMetadataView, ReportReadModel, ReportSummary};
pub use report_read_model_builder::ReportReadModelBuilder;
