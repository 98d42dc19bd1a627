use crate::ports::outbound::ProgressReporter;
use crate::sbom_merge::domain::DiffCounter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the merged SBOM on
/// stdout. Colour is used only when stderr is a terminal.
pub struct StderrProgressReporter {
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
        }
    }

    /// Creates a reporter that never emits colour codes
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn summary_lines(&self, counter: &DiffCounter) -> Vec<String> {
        let rows = [
            ("No change:", counter.unchanged),
            ("Updated:", counter.updated),
            ("New:", counter.added),
            ("Merged:", counter.merged),
        ];
        let mut lines = vec![
            String::new(),
            self.heading("Summary"),
            "-------".to_string(),
        ];
        for (label, count) in rows {
            let value = if self.colored && count > 0 && label != "No change:" {
                count.yellow().to_string()
            } else {
                count.to_string()
            };
            lines.push(format!("{:<12}{}", label, value));
        }
        lines
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        if self.colored {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        if self.colored {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_summary(&self, counter: &DiffCounter) {
        for line in self.summary_lines(counter) {
            eprintln!("{}", line);
        }
    }
}
