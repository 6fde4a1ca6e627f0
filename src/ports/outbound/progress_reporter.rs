/// ProgressReporter port for user-facing progress and warnings
///
/// All diagnostics of a run flow through this port so that stdout stays
/// reserved for the report itself.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress of a counted operation
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total expected items
    /// * `message` - Optional detail for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a recoverable error
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
