//! IPC commands exposed to the booth views
//! 暴露给展台视图的 IPC 命令
//!
//! ## Architecture / 架构
//!
//! Commands are thin: they read `Arc<BoothApp>` from managed state, call one
//! use case and map failures into [`CommandError`] with a stable `code`.
//! Flow, launcher and autostart decisions live in `booth-app`; only link
//! routing touches windows directly.
//! 命令只做薄封装：从托管状态读取 `Arc<BoothApp>`，调用一个用例，
//! 并把错误映射为带稳定 `code` 的 [`CommandError`]。

pub mod autostart;
pub mod error;
pub mod flow;
pub mod launcher;
pub mod navigation;

pub use autostart::{disable_autostart, enable_autostart, is_autostart_enabled};
pub use error::{map_err, CommandError};
pub use flow::{advance_flow, get_flow_step, reset_flow, set_flow_step};
pub use launcher::{launch_app, launch_configured_app};
pub use navigation::open_link;

use booth_core::ports::observability::TraceMetadata;

/// Copy the frontend trace metadata onto a command root span.
pub(crate) fn record_trace_fields(span: &tracing::Span, trace: &Option<TraceMetadata>) {
    if let Some(trace) = trace {
        span.record("trace_id", tracing::field::display(&trace.trace_id));
        span.record("trace_ts", trace.timestamp);
    }
}
