//! End-to-end tests for the bundling pipeline

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_bundle_archive_contains_output_and_docs() -> Result<()> {
  let project = TestProject::new("0.9.0")?;
  project.install_dotnet_writing(RELEASE_DIR, &["a.dll", "b.dll"])?;

  let output = project.run_bundler()?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let archive = project.archive_path("0.9.0");
  assert!(archive.exists());
  assert_eq!(
    archive_entries(&archive)?,
    vec!["LICENSE.md", "README.md", "a.dll", "b.dll"]
  );
  assert_eq!(archive_entry(&archive, "a.dll")?, "a.dll contents\n");
  assert_eq!(
    archive_entry(&archive, "LICENSE.md")?,
    "MIT License\n\nCopyright (c) Test Author\n"
  );

  let out = stdout(&output);
  assert!(out.contains("Release bundle created"));
  assert!(out.contains("PersonalityVectorExample_0.9.0.zip"));
  assert!(out.contains("SHA-256"));

  Ok(())
}

#[test]
fn test_bundle_keeps_framework_directory() -> Result<()> {
  let project = TestProject::new("1.4.0")?;
  project.install_dotnet_writing(BUILD_DIR, &["PersonalityVectorExample.dll", "PersonalityVectorExample.pdb"])?;

  let output = project.run_bundler()?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  assert_eq!(
    archive_entries(&project.archive_path("1.4.0"))?,
    vec![
      "LICENSE.md",
      "README.md",
      "netstandard2.1/",
      "netstandard2.1/PersonalityVectorExample.dll",
      "netstandard2.1/PersonalityVectorExample.pdb",
    ]
  );

  Ok(())
}

#[test]
fn test_build_failure_stops_before_packaging() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.install_dotnet("echo 'error CS1002: ; expected' >&2\nexit 1")?;

  let output = project.run_bundler()?;

  // Reported, but not a crash
  assert!(output.status.success());
  let err = stderr(&output);
  assert!(err.contains("An error occurred during build"), "stderr: {}", err);
  assert!(err.contains("error CS1002"), "build output should be inherited");

  assert!(!project.file_exists("dist"));
  assert!(!project.file_exists(&format!("{}/LICENSE.md", RELEASE_DIR)));

  Ok(())
}

#[test]
fn test_previous_release_is_cleaned() -> Result<()> {
  let project = TestProject::new("1.1.0")?;
  project.write_file(&format!("{}/stale.dll", RELEASE_DIR), "old build")?;
  project.write_file(&format!("{}/netcoreapp3.1/old.dll", RELEASE_DIR), "old framework")?;
  project.install_dotnet_writing(RELEASE_DIR, &["fresh.dll"])?;

  let output = project.run_bundler()?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  assert_eq!(
    project.list_dir(RELEASE_DIR)?,
    vec!["LICENSE.md", "README.md", "fresh.dll"]
  );
  assert_eq!(
    archive_entries(&project.archive_path("1.1.0"))?,
    vec!["LICENSE.md", "README.md", "fresh.dll"]
  );

  Ok(())
}

#[test]
fn test_rerun_produces_same_contents() -> Result<()> {
  let project = TestProject::new("2.0.0")?;
  project.install_dotnet_writing(BUILD_DIR, &["Lib.dll"])?;

  let first = project.run_bundler()?;
  assert!(first.status.success(), "stderr: {}", stderr(&first));
  let archive = project.archive_path("2.0.0");
  let entries_first = archive_entries(&archive)?;
  let dll_first = archive_entry(&archive, "netstandard2.1/Lib.dll")?;

  let second = project.run_bundler()?;
  assert!(second.status.success(), "stderr: {}", stderr(&second));

  assert_eq!(archive_entries(&archive)?, entries_first);
  assert_eq!(archive_entry(&archive, "netstandard2.1/Lib.dll")?, dll_first);
  assert_eq!(archive_entry(&archive, "README.md")?, "# PersonalityVectorExample\n\nA test project.\n");
  assert_eq!(project.list_dir("dist")?, vec!["PersonalityVectorExample_2.0.0.zip"]);

  Ok(())
}

#[test]
fn test_missing_version_is_fatal() -> Result<()> {
  let project = TestProject::with_property_group("<AssemblyName>PersonalityVectorExample</AssemblyName>")?;
  project.install_dotnet_writing(RELEASE_DIR, &["a.dll"])?;

  let output = project.run_bundler()?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Could not find <Version> element"));
  assert!(!project.file_exists("dist"));

  Ok(())
}

#[test]
fn test_empty_version_is_fatal() -> Result<()> {
  let project = TestProject::with_property_group("<Version></Version>")?;
  project.install_dotnet_writing(RELEASE_DIR, &["a.dll"])?;

  let output = project.run_bundler()?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("missing inner text"));
  assert!(!project.file_exists("dist"));

  Ok(())
}

#[test]
fn test_missing_readme_is_fatal() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  std::fs::remove_file(project.path.join("README.md"))?;
  project.install_dotnet_writing(RELEASE_DIR, &["a.dll"])?;

  let output = project.run_bundler()?;

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).contains("README.md"));
  assert!(!project.file_exists("dist"));

  Ok(())
}

#[test]
fn test_missing_build_tool_is_fatal() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  // PATH holds only the (empty) fake-bin directory
  let output = run_bundle_release(&project.path, &[("PATH", project.bin_dir.as_os_str())])?;

  assert_eq!(output.status.code(), Some(2));
  let err = stderr(&output);
  assert!(err.contains("dotnet build --configuration Release"), "stderr: {}", err);
  assert!(err.contains("is on PATH"), "missing help hint: {}", err);

  Ok(())
}
