//! Visitor flow commands.

use std::sync::Arc;

use booth_app::BoothApp;
use booth_core::{flow::FlowStep, ports::observability::TraceMetadata};
use tauri::State;
use tracing::{info_span, Instrument};

use super::{record_trace_fields, CommandError};

/// Current flow step. Views call this once on mount and then follow
/// `flow://step-changed`.
#[tauri::command]
pub async fn get_flow_step(
    app: State<'_, Arc<BoothApp>>,
    _trace: Option<TraceMetadata>,
) -> Result<FlowStep, CommandError> {
    let span = info_span!(
        "command.flow.get_step",
        trace_id = tracing::field::Empty,
        trace_ts = tracing::field::Empty,
    );
    record_trace_fields(&span, &_trace);
    span.in_scope(|| Ok(app.flow.current()))
}

#[tauri::command]
pub async fn set_flow_step(
    app: State<'_, Arc<BoothApp>>,
    step: FlowStep,
    _trace: Option<TraceMetadata>,
) -> Result<FlowStep, CommandError> {
    let span = info_span!(
        "command.flow.set_step",
        trace_id = tracing::field::Empty,
        trace_ts = tracing::field::Empty,
    );
    record_trace_fields(&span, &_trace);
    async { app.flow.set_step(step).await.map_err(CommandError::from) }
        .instrument(span)
        .await
}

#[tauri::command]
pub async fn advance_flow(
    app: State<'_, Arc<BoothApp>>,
    _trace: Option<TraceMetadata>,
) -> Result<FlowStep, CommandError> {
    let span = info_span!(
        "command.flow.advance",
        trace_id = tracing::field::Empty,
        trace_ts = tracing::field::Empty,
    );
    record_trace_fields(&span, &_trace);
    async { Ok(app.flow.advance().await) }.instrument(span).await
}

#[tauri::command]
pub async fn reset_flow(
    app: State<'_, Arc<BoothApp>>,
    _trace: Option<TraceMetadata>,
) -> Result<FlowStep, CommandError> {
    let span = info_span!(
        "command.flow.reset",
        trace_id = tracing::field::Empty,
        trace_ts = tracing::field::Empty,
    );
    record_trace_fields(&span, &_trace);
    async { Ok(app.flow.reset().await) }.instrument(span).await
}
