//! IPC payloads shared with the booth frontend.

use booth_core::flow::FlowStep;
use serde::{Deserialize, Serialize};

/// Payload of `flow://step-changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStepChangedEvent {
    pub step: FlowStep,
}
