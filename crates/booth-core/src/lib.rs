//! # booth-core
//!
//! Core domain models for the Notebook Booth kiosk.
//!
//! This crate contains the visitor flow, the launcher contract and the
//! configuration DTO without any Tauri or OS dependencies.

pub mod app_dirs;
pub mod config;
pub mod flow;
pub mod launcher;
pub mod navigation;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::BoothConfig;
pub use flow::{FlowError, FlowStep, TransitionPolicy};
pub use launcher::{LaunchError, PackageName};
pub use navigation::{LinkDecision, LinkPolicy};
