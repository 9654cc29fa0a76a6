//! Carve progress reporting for long-running generations

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CARVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the total number of cells to visit
#[derive(Debug)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a bar spanning `total_cells` carves
    pub fn new(total_cells: u64) -> Self {
        let bar = ProgressBar::new(total_cells);
        bar.set_style(CARVE_STYLE.clone());
        Self { bar }
    }

    /// Record one carved cell
    pub fn carve(&self) {
        self.bar.inc(1);
    }

    /// Clear the bar once the run completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
