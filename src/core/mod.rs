//! Core building blocks for bundle-release
//!
//! - **error**: Error types with contextual help messages and exit codes
//! - **layout**: The fixed project layout, resolved from one anchor directory
//! - **process**: External build tool invocation

pub mod error;
pub mod layout;
pub mod process;
