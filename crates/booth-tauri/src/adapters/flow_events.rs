use anyhow::Result;
use async_trait::async_trait;
use booth_core::{flow::FlowStep, ports::FlowEventPort};
use tauri::{AppHandle, Runtime};

use crate::events::forward_flow_step_changed;
use crate::models::FlowStepChangedEvent;

/// Publishes flow step changes as `flow://step-changed` to all windows.
pub struct TauriFlowEventEmitter<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriFlowEventEmitter<R> {
    pub(crate) fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait]
impl<R: Runtime> FlowEventPort for TauriFlowEventEmitter<R> {
    async fn emit_step_changed(&self, step: FlowStep) -> Result<()> {
        forward_flow_step_changed(&self.app, FlowStepChangedEvent { step })?;
        Ok(())
    }
}
