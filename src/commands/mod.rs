//! CLI commands for bundle-release
//!
//! - **bundle**: Clean, build, assemble and archive a release
//!
//! Commands take a `&ReleaseLayout` so every path comes from one place.

pub mod bundle;

pub use bundle::run_bundle;
