//! `bundle-release` - Build the project and package it as a versioned zip
//!
//! Stages, strictly in order:
//! 1. Remove the previous release directory
//! 2. Run `dotnet build --configuration Release`
//! 3. Copy LICENSE.md and README.md into the release directory
//! 4. Read `<Version>` from the project file
//! 5. Zip the release directory into `dist/{PackageName}_{version}.zip`
//!
//! A failed build stops the pipeline after stage 2 without producing an archive.

use crate::core::error::{BundleResult, ResultExt};
use crate::core::layout::ReleaseLayout;
use crate::core::process::CommandOutcome;
use crate::release::{ArchiveSummary, archive, get_project_version};
use std::fs;
use std::path::Path;

/// Run the whole pipeline
pub fn run_bundle(layout: &ReleaseLayout) -> BundleResult<()> {
  println!("📦 Bundling {}", layout.package_name);
  println!();

  if let CommandOutcome::Failed { code } = run_build(layout)? {
    match code {
      Some(code) => eprintln!("\n❌ An error occurred during build (exit code {})", code),
      None => eprintln!("\n❌ An error occurred during build (terminated by signal)"),
    }
    return Ok(());
  }

  let summary = assemble_and_archive(layout)?;

  println!();
  println!("✅ Release bundle created");
  println!("   Archive: {}", summary.path.display());
  println!("   Files:   {}", summary.files);
  println!("   SHA-256: {}", summary.sha256);
  Ok(())
}

/// Clean the release directory, then run the build tool from the project root
pub fn run_build(layout: &ReleaseLayout) -> BundleResult<CommandOutcome> {
  if layout.release_dir.exists() {
    println!("🧹 Removing previous release: {}", layout.release_dir.display());
    fs::remove_dir_all(&layout.release_dir)
      .with_context(|| format!("Failed to remove {}", layout.release_dir.display()))?;
  }

  println!("🔨 Executing: {}", layout.build_command);
  layout.build_command.run(&layout.root)
}

/// Copy the docs next to the build output and zip the release directory
///
/// Not transactional: if the version lookup fails, the copied files stay put.
pub fn assemble_and_archive(layout: &ReleaseLayout) -> BundleResult<ArchiveSummary> {
  if !layout.build_dir.is_dir() {
    println!(
      "⚠️  Build output directory not found: {} (archiving release directory as-is)",
      layout.build_dir.display()
    );
  }

  copy_file(&layout.license_path, &layout.release_license_path())?;
  copy_file(&layout.readme_path, &layout.release_readme_path())?;

  let version = get_project_version(&layout.project_file)?;
  println!("🏷️  Version: {}", version);

  let archive_path = layout.archive_path(&version);
  println!("🗜️  Writing {}", archive_path.display());
  archive::create_zip(&layout.release_dir, &archive_path)
}

fn copy_file(from: &Path, to: &Path) -> BundleResult<()> {
  fs::copy(from, to).with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
  Ok(())
}
