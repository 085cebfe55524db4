//! Visitor flow domain module.
//!
//! The booth walks each visitor through a strictly linear journey. This module
//! holds the step type and the transition policy; the owned state object lives
//! in `booth-app`.

mod policy;
mod step;

pub use policy::{FlowError, TransitionPolicy};
pub use step::FlowStep;
