//! Error types for bundle-release with contextual messages and exit codes
//!
//! A build that runs and fails is not an error here: it is reported through
//! [`crate::core::process::CommandOutcome`]. Everything in this module is fatal.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for bundle-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (project metadata, missing files)
  User = 1,
  /// System error (I/O, archive writer, build tool not startable)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for bundle-release
#[derive(Debug)]
pub enum BundleError {
  /// Project metadata errors (version lookup)
  Metadata(MetadataError),

  /// External build tool errors
  Build(BuildError),

  /// I/O errors
  Io(io::Error),

  /// Zip writer errors
  Archive(zip::result::ZipError),

  /// Generic error with message and optional context
  Message { message: String, context: Option<String> },
}

impl BundleError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    BundleError::Message {
      message: msg.into(),
      context: None,
    }
  }

  /// Add context to an existing error
  ///
  /// Typed errors keep their variant. I/O errors keep their kind and gain the
  /// context as a message prefix, since a bare `io::Error` never names the path.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      BundleError::Message { message, context } => BundleError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      BundleError::Io(err) => BundleError::Io(io::Error::new(err.kind(), format!("{}: {}", ctx_str, err))),
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      BundleError::Metadata(_) => ExitCode::User,
      BundleError::Build(_) => ExitCode::System,
      BundleError::Io(_) => ExitCode::System,
      BundleError::Archive(_) => ExitCode::System,
      BundleError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      BundleError::Metadata(e) => e.help_message(),
      BundleError::Build(e) => e.help_message(),
      _ => None,
    }
  }
}

impl fmt::Display for BundleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BundleError::Metadata(e) => write!(f, "{}", e),
      BundleError::Build(e) => write!(f, "{}", e),
      BundleError::Io(e) => write!(f, "I/O error: {}", e),
      BundleError::Archive(e) => write!(f, "Archive error: {}", e),
      BundleError::Message { message, context } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for BundleError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BundleError::Io(e) => Some(e),
      BundleError::Archive(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for BundleError {
  fn from(err: io::Error) -> Self {
    BundleError::Io(err)
  }
}

impl From<zip::result::ZipError> for BundleError {
  fn from(err: zip::result::ZipError) -> Self {
    BundleError::Archive(err)
  }
}

impl From<walkdir::Error> for BundleError {
  fn from(err: walkdir::Error) -> Self {
    match err.into_io_error() {
      Some(io_err) => BundleError::Io(io_err),
      None => BundleError::message("Filesystem loop detected while walking release directory"),
    }
  }
}

impl From<MetadataError> for BundleError {
  fn from(err: MetadataError) -> Self {
    BundleError::Metadata(err)
  }
}

impl From<BuildError> for BundleError {
  fn from(err: BuildError) -> Self {
    BundleError::Build(err)
  }
}

impl From<std::path::StripPrefixError> for BundleError {
  fn from(err: std::path::StripPrefixError) -> Self {
    BundleError::message(format!("Path strip prefix error: {}", err))
  }
}

/// Project metadata errors
#[derive(Debug)]
pub enum MetadataError {
  /// Metadata file could not be read
  Unreadable { path: PathBuf, reason: String },

  /// Metadata file is not well-formed XML
  Parse { path: PathBuf, reason: String },

  /// No `<Version>` element anywhere in the document
  MissingElement { path: PathBuf },

  /// `<Version>` element exists but has no text before its first child element
  MalformedContent { path: PathBuf },
}

impl MetadataError {
  fn help_message(&self) -> Option<String> {
    match self {
      MetadataError::MissingElement { .. } => {
        Some("Add a <Version>x.y.z</Version> element to a <PropertyGroup> in the project file.".to_string())
      }
      MetadataError::MalformedContent { .. } => {
        Some("Give the <Version> element a value, e.g. <Version>1.0.0</Version>.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for MetadataError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MetadataError::Unreadable { path, reason } => {
        write!(f, "Failed to read project file '{}': {}", path.display(), reason)
      }
      MetadataError::Parse { path, reason } => {
        write!(f, "Failed to parse project file '{}': {}", path.display(), reason)
      }
      MetadataError::MissingElement { path } => {
        write!(f, "Could not find <Version> element in: {}", path.display())
      }
      MetadataError::MalformedContent { path } => {
        write!(f, "Version element in '{}' missing inner text", path.display())
      }
    }
  }
}

/// External build tool errors
#[derive(Debug)]
pub enum BuildError {
  /// The build tool could not be started at all
  Spawn { command: String, reason: String },
}

impl BuildError {
  fn help_message(&self) -> Option<String> {
    match self {
      BuildError::Spawn { .. } => Some("Make sure the .NET SDK is installed and `dotnet` is on PATH.".to_string()),
    }
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::Spawn { command, reason } => {
        write!(f, "Failed to execute `{}`: {}", command, reason)
      }
    }
  }
}

/// Result type alias for bundle-release
pub type BundleResult<T> = Result<T, BundleError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> BundleResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<BundleError>,
{
  fn with_context<F>(self, f: F) -> BundleResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &BundleError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
