//! Progress reporting for interactive runs

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner-based stage reporting for the one-shot pipeline
///
/// The pipeline has a handful of coarse stages rather than a long uniform
/// loop, so a ticking spinner with stage messages fits better than a bar.
pub struct ProgressManager {
    spinner: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create and start the spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { spinner }
    }

    /// Announce the current pipeline stage
    pub fn stage(&self, message: impl Into<String>) {
        self.spinner.set_message(message.into());
    }

    /// Stop the spinner with a closing message
    pub fn finish(&self, message: impl Into<String>) {
        self.spinner.finish_with_message(message.into());
    }
}
