use crate::sbom_merge::domain::DiffCounter;

/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing reporting (e.g., to stderr) so the
/// merged document on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Reports the merge summary
    ///
    /// The default renders the four counters as plain lines.
    fn report_summary(&self, counter: &DiffCounter) {
        self.report("");
        self.report("Summary");
        self.report("-------");
        self.report(&format!("No change:  {}", counter.unchanged));
        self.report(&format!("Updated:    {}", counter.updated));
        self.report(&format!("New:        {}", counter.added));
        self.report(&format!("Merged:     {}", counter.merged));
    }
}
