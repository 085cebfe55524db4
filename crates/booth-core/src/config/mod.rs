//! Booth configuration.
//!
//! Pure data: the TOML file maps onto [`BoothConfig`], missing keys fall back to
//! the values in `defaults.rs`. Loading from disk happens in the Tauri bootstrap.

mod defaults;
mod model;

pub use defaults::{DEFAULT_DEV_URL, DEFAULT_NOTEBOOK_PACKAGE, DEFAULT_WINDOW_TITLE};
pub use model::{
    BoothConfig, DesktopLaunchCommand, FlowConfig, KioskConfig, LauncherConfig, WindowConfig,
};
