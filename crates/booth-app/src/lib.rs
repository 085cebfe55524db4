//! Notebook Booth application layer
//!
//! Owns the visitor flow state and the use cases the Tauri commands call into.

pub mod builder;
pub mod usecases;

pub use builder::{AppBuilder, BoothApp};
pub use usecases::flow::{FlowOrchestrator, FlowState};
pub use usecases::launch_app::LaunchExternalApp;
