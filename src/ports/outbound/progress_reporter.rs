/// ProgressReporter port for progress and diagnostic output
///
/// A reporter is handed to every component that logs, so output stays scoped
/// to one report generation. Implementations must be `Send + Sync` because
/// copyright lookups share the reporter across concurrent futures.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a diagnostic message (failed lookups, split ids, statuses)
    fn report_debug(&self, message: &str);

    /// Reports progress through a sequence
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
