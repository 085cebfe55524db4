//! Launcher bridge domain types.
//!
//! The booth hands the visitor off to an external application identified by a
//! platform package name. The actual foregrounding is done by a
//! [`crate::ports::LauncherPort`] implementation.

mod error;
mod package_name;

pub use error::LaunchError;
pub use package_name::PackageName;
