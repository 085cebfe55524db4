//! # booth-platform
//!
//! Platform-specific implementations for the Notebook Booth.
//!
//! This crate contains the adapters that talk to the operating system:
//! spawning stand-in programs for package identifiers on desktop and
//! resolving the application directories.

pub mod adapters;
pub mod app_dirs;

pub use adapters::launcher::CommandLauncher;
pub use app_dirs::DirsAppDirsAdapter;
