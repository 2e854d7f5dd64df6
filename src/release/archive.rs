//! Zip archive creation for a release directory
//!
//! Entries are named relative to the archived directory, written in sorted
//! order, and stamped with each file's local modification time. Re-running on
//! unchanged input yields the same listing and the same entry contents.

use crate::core::error::{BundleResult, ResultExt};
use crate::ui::progress::ArchiveProgress;
use crate::utils::archive_entry_name;
use chrono::{Datelike, Local, Timelike};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// What was written
#[derive(Debug, Clone)]
pub struct ArchiveSummary {
  pub path: PathBuf,
  /// Number of file entries (directories not counted)
  pub files: usize,
  /// Hex SHA-256 of the finished archive
  pub sha256: String,
}

/// Zip everything under `source_dir` into `archive_path`
///
/// The parent of `archive_path` is created if needed and an existing archive
/// is overwritten. `source_dir` itself is not an entry; its children are at
/// the archive root.
pub fn create_zip(source_dir: &Path, archive_path: &Path) -> BundleResult<ArchiveSummary> {
  // Walk first so a missing source directory never leaves an empty archive behind
  let entries = collect_entries(source_dir)?;

  if let Some(parent) = archive_path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create output directory {}", parent.display()))?;
  }

  let file =
    File::create(archive_path).with_context(|| format!("Failed to create archive {}", archive_path.display()))?;
  let mut zip = ZipWriter::new(file);
  let mut progress = ArchiveProgress::new(entries.len(), "Compressing");
  let mut files = 0;

  for entry in &entries {
    let relative = entry.path().strip_prefix(source_dir)?;
    let is_dir = entry.file_type().is_dir();
    let name = archive_entry_name(relative, is_dir);

    let modified = entry.metadata()?.modified()?;
    let options = SimpleFileOptions::default()
      .compression_method(CompressionMethod::Deflated)
      .last_modified_time(zip_timestamp(modified));

    if is_dir {
      zip.add_directory(name, options)?;
    } else {
      zip.start_file(name, options)?;
      let mut src = File::open(entry.path()).with_context(|| format!("Failed to read {}", entry.path().display()))?;
      io::copy(&mut src, &mut zip)?;
      files += 1;
    }

    progress.inc();
  }

  zip.finish()?;

  Ok(ArchiveSummary {
    path: archive_path.to_path_buf(),
    files,
    sha256: file_sha256(archive_path)?,
  })
}

/// All entries below `root`, sorted by name at every level
fn collect_entries(root: &Path) -> BundleResult<Vec<DirEntry>> {
  let mut entries = Vec::new();
  for entry in WalkDir::new(root).min_depth(1).follow_links(true).sort_by_file_name() {
    entries.push(entry?);
  }
  Ok(entries)
}

/// Local wall-clock time in the zip's MS-DOS format
///
/// Times outside the 1980..=2107 range zip can encode fall back to 1980-01-01.
fn zip_timestamp(modified: SystemTime) -> zip::DateTime {
  let local: chrono::DateTime<Local> = modified.into();
  let Ok(year) = u16::try_from(local.year()) else {
    return zip::DateTime::default();
  };

  zip::DateTime::from_date_and_time(
    year,
    local.month() as u8,
    local.day() as u8,
    local.hour() as u8,
    local.minute() as u8,
    local.second() as u8,
  )
  .unwrap_or_default()
}

/// Hex SHA-256 of a file's contents
pub fn file_sha256(path: &Path) -> BundleResult<String> {
  let mut file = File::open(path)?;
  let mut hasher = Sha256::new();
  io::copy(&mut file, &mut hasher)?;
  Ok(format!("{:x}", hasher.finalize()))
}
