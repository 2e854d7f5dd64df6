//! Progress indicator for archive creation
//!
//! Uses `linya` for an allocation-free progress bar drawn to stderr

use linya::{Bar, Progress};

/// Progress bar for entries written into an archive
pub struct ArchiveProgress {
  progress: Progress,
  bar: Bar,
}

impl ArchiveProgress {
  /// Create a new progress bar for `total` archive entries
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self { progress, bar }
  }

  /// Increment progress by 1
  pub fn inc(&mut self) {
    self.progress.inc_and_draw(&self.bar, 1);
  }
}
