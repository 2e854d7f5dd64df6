//! Fixed project layout
//!
//! Every location the bundler touches is derived from one anchor directory,
//! the project root. The layout is computed once and passed by reference to
//! each stage; nothing here touches the filesystem.

use crate::core::process::BuildCommand;
use std::path::{Path, PathBuf};

/// Name of the packaged project, also the archive name prefix
pub const PACKAGE_NAME: &str = "PersonalityVectorExample";

const BUILD_CONFIGURATION: &str = "Release";
const TARGET_FRAMEWORK: &str = "netstandard2.1";
const LICENSE_FILE: &str = "LICENSE.md";
const README_FILE: &str = "README.md";
const OUTPUT_DIR: &str = "dist";

/// Resolved paths and commands for one bundling run
#[derive(Debug, Clone)]
pub struct ReleaseLayout {
  /// Project root (the anchor)
  pub root: PathBuf,
  /// Where the build tool writes compiled artifacts
  pub build_dir: PathBuf,
  /// Parent of `build_dir`; recreated each run and archived whole
  pub release_dir: PathBuf,
  pub license_path: PathBuf,
  pub readme_path: PathBuf,
  /// Project file holding `<Version>`
  pub project_file: PathBuf,
  /// Where finished archives land
  pub output_dir: PathBuf,
  pub package_name: String,
  pub build_command: BuildCommand,
}

impl ReleaseLayout {
  /// Compute the layout for a project rooted at `anchor`
  pub fn from_anchor(anchor: &Path) -> Self {
    let root = anchor.to_path_buf();
    let project_dir = root.join("src").join(PACKAGE_NAME);
    let release_dir = project_dir.join("bin").join(BUILD_CONFIGURATION);

    Self {
      build_dir: release_dir.join(TARGET_FRAMEWORK),
      release_dir,
      license_path: root.join(LICENSE_FILE),
      readme_path: root.join(README_FILE),
      project_file: project_dir.join(format!("{}.csproj", PACKAGE_NAME)),
      output_dir: root.join(OUTPUT_DIR),
      package_name: PACKAGE_NAME.to_string(),
      build_command: BuildCommand::dotnet_release(),
      root,
    }
  }

  /// Swap the build command (tests, alternative toolchains)
  #[cfg(test)]
  pub fn with_build_command(mut self, command: BuildCommand) -> Self {
    self.build_command = command;
    self
  }

  /// Destination of the license inside the release directory
  pub fn release_license_path(&self) -> PathBuf {
    self.release_dir.join(LICENSE_FILE)
  }

  /// Destination of the readme inside the release directory
  pub fn release_readme_path(&self) -> PathBuf {
    self.release_dir.join(README_FILE)
  }

  /// `{package_name}_{version}.zip`
  pub fn archive_name(&self, version: &str) -> String {
    format!("{}_{}.zip", self.package_name, version)
  }

  pub fn archive_path(&self, version: &str) -> PathBuf {
    self.output_dir.join(self.archive_name(version))
  }
}
