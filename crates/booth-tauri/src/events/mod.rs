//! Event Forwarding - Forward backend events to frontend
//! 事件转发 - 将后端事件转发到前端

use tauri::{AppHandle, Emitter};

use crate::models::FlowStepChangedEvent;

pub const FLOW_STEP_CHANGED: &str = "flow://step-changed";

/// Forward a flow step change to every booth window.
pub fn forward_flow_step_changed<R: tauri::Runtime>(
    app: &AppHandle<R>,
    event: FlowStepChangedEvent,
) -> tauri::Result<()> {
    app.emit(FLOW_STEP_CHANGED, event)
}
