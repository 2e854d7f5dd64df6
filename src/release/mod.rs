//! Release artifacts: the project version and the distributable archive
//!
//! - **metadata**: Reads `<Version>` from the project file
//! - **archive**: Zips the release directory into `{PackageName}_{version}.zip`

pub mod archive;
pub mod metadata;

pub use archive::ArchiveSummary;
pub use metadata::get_project_version;
