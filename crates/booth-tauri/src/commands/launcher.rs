//! Launcher bridge commands.
//!
//! A failed launch resolves the `invoke` promise as rejected with a
//! [`CommandError`]; the flow step is left for the view to decide.

use std::sync::Arc;

use booth_app::BoothApp;
use booth_core::ports::observability::TraceMetadata;
use tauri::State;
use tracing::{info_span, Instrument};

use super::{record_trace_fields, CommandError};

#[tauri::command]
pub async fn launch_app(
    app: State<'_, Arc<BoothApp>>,
    package_name: String,
    _trace: Option<TraceMetadata>,
) -> Result<(), CommandError> {
    let span = info_span!(
        "command.launcher.launch_app",
        trace_id = tracing::field::Empty,
        trace_ts = tracing::field::Empty,
    );
    record_trace_fields(&span, &_trace);
    async {
        app.launch_app
            .execute(&package_name)
            .await
            .map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

/// Launch the app named in `launcher.package_name`.
#[tauri::command]
pub async fn launch_configured_app(
    app: State<'_, Arc<BoothApp>>,
    _trace: Option<TraceMetadata>,
) -> Result<(), CommandError> {
    let span = info_span!(
        "command.launcher.launch_configured_app",
        trace_id = tracing::field::Empty,
        trace_ts = tracing::field::Empty,
    );
    record_trace_fields(&span, &_trace);
    async {
        app.launch_app
            .execute_configured()
            .await
            .map_err(CommandError::from)
    }
    .instrument(span)
    .await
}
