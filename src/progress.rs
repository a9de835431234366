//! Progress bar display for the install sequence

use indicatif::{ProgressBar, ProgressStyle};

/// Step-level progress display for a file-based install
pub struct InstallProgress {
    step_pb: ProgressBar,
}

impl InstallProgress {
    /// Create a new progress display with the total step count
    pub fn new(total_steps: u64) -> Self {
        let step_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let step_pb = ProgressBar::new(total_steps);
        step_pb.set_style(step_style);

        Self { step_pb }
    }

    /// Update to show the step currently running
    pub fn update_step(&self, step_name: &str) {
        self.step_pb.set_message(step_name.to_string());
    }

    /// Mark the current step finished
    pub fn inc_step(&self) {
        self.step_pb.inc(1);
    }

    /// Print a line above the bar without breaking it
    pub fn println(&self, line: &str) {
        self.step_pb.println(line);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.step_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.step_pb.abandon();
    }
}
