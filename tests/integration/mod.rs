//! Integration tests for bundle-release
//!
//! The bundling tests put a fake `dotnet` shell script on PATH, so they only
//! run on Unix.

#[cfg(unix)]
mod test_bundle;
