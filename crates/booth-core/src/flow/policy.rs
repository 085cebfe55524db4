//! Transition policy for the visitor flow.
//!
//! By default any step may follow any step so that an
//! operator can jump screens by hand. `Linear` is the opt-in stricter table.

use serde::{Deserialize, Serialize};

use super::FlowStep;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("transition from {from} to {to} is not allowed")]
    TransitionRejected { from: FlowStep, to: FlowStep },
}

/// Which transitions `set_step` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any step may follow any step.
    #[default]
    Permissive,
    /// Only the explicit allowed-next table is accepted.
    Linear,
}

impl TransitionPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            TransitionPolicy::Linear
        } else {
            TransitionPolicy::Permissive
        }
    }

    /// Steps reachable from `from` under this policy.
    pub fn allowed_next(self, from: FlowStep) -> &'static [FlowStep] {
        match self {
            TransitionPolicy::Permissive => &FlowStep::ALL,
            TransitionPolicy::Linear => match from {
                FlowStep::Welcome => &[FlowStep::Welcome, FlowStep::Instructions],
                FlowStep::Instructions => &[
                    FlowStep::Instructions,
                    FlowStep::WaitReturn,
                    FlowStep::Welcome,
                ],
                FlowStep::WaitReturn => &[
                    FlowStep::WaitReturn,
                    FlowStep::ThankYou,
                    FlowStep::Welcome,
                ],
                FlowStep::ThankYou => &[FlowStep::ThankYou, FlowStep::Welcome],
            },
        }
    }

    pub fn check(self, from: FlowStep, to: FlowStep) -> Result<(), FlowError> {
        if self.allowed_next(from).contains(&to) {
            Ok(())
        } else {
            Err(FlowError::TransitionRejected { from, to })
        }
    }
}
