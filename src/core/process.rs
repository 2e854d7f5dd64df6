//! External build tool invocation
//!
//! Runs a fixed command line synchronously with inherited stdio and reports
//! how it ended. A non-zero exit is an outcome, not an error: callers branch
//! on [`CommandOutcome`] instead of matching error variants.

use crate::core::error::{BuildError, BundleResult};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// A program plus its fixed argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
  program: String,
  args: Vec<String>,
}

impl BuildCommand {
  pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
    }
  }

  /// `dotnet build --configuration Release`
  pub fn dotnet_release() -> Self {
    Self::new("dotnet", ["build", "--configuration", "Release"])
  }

  /// Run the command from `cwd` and block until it exits
  ///
  /// stdin, stdout and stderr are inherited so build output streams straight
  /// to the operator. Only a failure to start the process is an error.
  pub fn run(&self, cwd: &Path) -> BundleResult<CommandOutcome> {
    let status = Command::new(&self.program)
      .args(&self.args)
      .current_dir(cwd)
      .status()
      .map_err(|e| BuildError::Spawn {
        command: self.to_string(),
        reason: e.to_string(),
      })?;

    if status.success() {
      Ok(CommandOutcome::Succeeded)
    } else {
      // None when terminated by a signal
      Ok(CommandOutcome::Failed { code: status.code() })
    }
  }
}

impl fmt::Display for BuildCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// How an external command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
  /// Exit status 0
  Succeeded,
  /// Non-zero exit, or killed by a signal (`code` is `None`)
  Failed { code: Option<i32> },
}
