//! Visitor flow use cases.

pub mod orchestrator;
mod state;

pub use orchestrator::FlowOrchestrator;
pub use state::FlowState;
