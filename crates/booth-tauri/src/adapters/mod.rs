//! Tauri-side implementations of the booth ports
//! 展台端口的 Tauri 实现
//!
//! ## Architecture / 架构
//!
//! These adapters need an `AppHandle` and are only constructed inside the
//! Tauri setup phase, then handed to `AppBuilder`. Adapters with no Tauri
//! dependency live in `booth-platform`.
//! 这些适配器依赖 `AppHandle`，只在 Tauri setup 阶段构造并注入 `AppBuilder`。
//! 不依赖 Tauri 的适配器位于 `booth-platform`。

#[cfg(not(any(target_os = "android", target_os = "ios")))]
mod autostart;
mod flow_events;

#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use autostart::TauriAutostart;
pub use flow_events::TauriFlowEventEmitter;
