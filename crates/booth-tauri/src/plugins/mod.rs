//! Tauri plugins owned by the booth.
//!
//! - `native_launcher`: bridge to the Android `NativeLauncherPlugin`

pub mod native_launcher;
