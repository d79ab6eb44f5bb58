//! Progress display for batch tracing of layout files

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::algorithm::tracer::TraceOutcome;
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Layouts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tallies trace outcomes while driving a single batch progress bar
pub struct ProgressManager {
    bar: ProgressBar,
    connected: usize,
    blocked: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            connected: 0,
            blocked: 0,
        }
    }

    /// Set the number of layouts in the batch
    pub fn initialize(&self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Show the layout currently being traced
    pub fn start_file(&self, path: &Path) {
        let display_name = path.file_name().unwrap_or_default().to_string_lossy();
        self.bar.set_message(display_name.into_owned());
    }

    /// Record a finished trace
    pub fn complete_file(&mut self, outcome: TraceOutcome) {
        match outcome {
            TraceOutcome::Connected => self.connected += 1,
            TraceOutcome::Blocked | TraceOutcome::BlockedAtStart => self.blocked += 1,
        }
        self.bar.inc(1);
    }

    /// Number of layouts traced so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Connected and blocked trace counts
    pub const fn tally(&self) -> (usize, usize) {
        (self.connected, self.blocked)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} connected, {} blocked",
            self.connected, self.blocked
        ));
    }
}
