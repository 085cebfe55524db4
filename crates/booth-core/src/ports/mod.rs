//! Port interfaces for the application layer
//!
//! Ports define the contract between the booth use cases and the platform
//! (Tauri, the OS, the Android plugin). The core never depends on an
//! implementation.

pub mod app_dirs;
pub mod autostart;
pub mod errors;
pub mod flow_events;
pub mod launcher;
pub mod observability;

pub use app_dirs::AppDirsPort;
pub use autostart::AutostartPort;
pub use errors::AppDirsError;
pub use flow_events::FlowEventPort;
pub use launcher::LauncherPort;
