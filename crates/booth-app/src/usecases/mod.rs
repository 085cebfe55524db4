//! Business logic use cases
//!
//! ```text
//! [booth view] --set_flow_step--> FlowOrchestrator --> FlowState
//!                                        |
//!                                        +--> FlowEventPort (views re-render)
//! [booth view] --launch_app-----> LaunchExternalApp --> LauncherPort
//! ```

pub mod flow;
pub mod kiosk_autostart;
pub mod launch_app;

pub use kiosk_autostart::KioskAutostart;
