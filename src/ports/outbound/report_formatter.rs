use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a license report
pub trait ReportFormatter {
    /// Renders the read model as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
