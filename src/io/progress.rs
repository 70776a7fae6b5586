//! Progress bar tracking tile rows stamped during a render

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Optional progress display for a single render
///
/// When disabled every method is a no-op, so callers never branch on quiet mode.
pub struct RenderProgress {
    bar: Option<ProgressBar>,
}

impl RenderProgress {
    /// Create a progress display, or a silent one when `visible` is false
    pub fn new(visible: bool) -> Self {
        Self {
            bar: visible.then(|| ProgressBar::new(0)),
        }
    }

    /// Whether anything is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Configure the bar for a render with `rows` tile rows
    pub fn start(&self, label: &str, rows: usize) {
        if let Some(bar) = &self.bar {
            bar.set_style(ROW_STYLE.clone());
            bar.set_length(rows as u64);
            bar.set_position(0);
            bar.set_message(label.to_string());
        }
    }

    /// Record one more stamped row
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Rows recorded so far, or `None` when disabled
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
