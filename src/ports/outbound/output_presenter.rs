use crate::shared::Result;

/// OutputPresenter port for delivering the formatted report
///
/// Abstracts the destination (stdout, a file) of the rendered report.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
