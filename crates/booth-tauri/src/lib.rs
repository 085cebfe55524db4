//! # booth-tauri
//!
//! Tauri integration layer for the Notebook Booth.
//!
//! ## Modules
//!
//! - **bootstrap**: config loading, tracing, main window, runtime wiring
//! - **adapters**: Tauri implementations of the core ports
//! - **commands**: IPC command handlers called by the booth views
//! - **events**: backend → frontend event forwarding
//! - **plugins**: the `native-launcher` mobile bridge
//! - **models**: IPC payloads

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod events;
pub mod models;
pub mod plugins;
