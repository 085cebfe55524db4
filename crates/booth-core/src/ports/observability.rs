//! Request correlation between the booth views and the backend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sent by the views as the optional `_trace` argument of every command and
/// recorded on the command's root span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceMetadata {
    pub trace_id: Uuid,
    /// Milliseconds since the Unix epoch, taken in the view.
    pub timestamp: u64,
}
