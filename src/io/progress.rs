//! Progress display for batch rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered images of a batch on a single progress bar
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Progress bar expecting `image_count` images
    pub fn new(image_count: usize) -> Self {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show the image about to be rendered
    pub fn start_image(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one image as written
    pub fn complete_image(&self) {
        self.bar.inc(1);
    }

    /// Number of images written so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("All images rendered");
    }
}
