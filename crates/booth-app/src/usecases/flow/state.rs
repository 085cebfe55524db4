use std::sync::atomic::{AtomicU8, Ordering};

use booth_core::flow::{FlowError, FlowStep, TransitionPolicy};

/// Process-wide visitor flow state.
///
/// Any holder of an `Arc<FlowState>` may read the current step. Writes are
/// crate-private and go through [`super::FlowOrchestrator`].
///
/// The step is a single atomic byte, so reads never block and never observe
/// anything but one of the four steps.
#[derive(Debug)]
pub struct FlowState {
    step: AtomicU8,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowState {
    /// Creates the state at `WELCOME`.
    pub fn new() -> Self {
        Self::starting_at(FlowStep::Welcome)
    }

    pub fn starting_at(step: FlowStep) -> Self {
        Self {
            step: AtomicU8::new(step.as_u8()),
        }
    }

    pub fn current(&self) -> FlowStep {
        decode(self.step.load(Ordering::Acquire))
    }

    /// Moves to `to` if `policy` allows it from the current step.
    ///
    /// Returns the step that was replaced.
    pub(crate) fn transition(
        &self,
        to: FlowStep,
        policy: TransitionPolicy,
    ) -> Result<FlowStep, FlowError> {
        self.step
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                policy.check(decode(raw), to).ok().map(|_| to.as_u8())
            })
            .map(decode)
            .map_err(|raw| FlowError::TransitionRejected {
                from: decode(raw),
                to,
            })
    }

    /// Unconditional write. Returns the step that was replaced.
    pub(crate) fn replace(&self, to: FlowStep) -> FlowStep {
        decode(self.step.swap(to.as_u8(), Ordering::AcqRel))
    }

    /// Writes `to` only if the current step is `expected`.
    pub(crate) fn replace_if(&self, expected: FlowStep, to: FlowStep) -> bool {
        self.step
            .compare_exchange(
                expected.as_u8(),
                to.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

// Only `FlowStep::as_u8` values are ever stored.
fn decode(raw: u8) -> FlowStep {
    FlowStep::from_u8(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_welcome() {
        assert_eq!(FlowState::new().current(), FlowStep::Welcome);
        assert_eq!(FlowState::default().current(), FlowStep::Welcome);
    }

    #[test]
    fn permissive_transition_overwrites_and_returns_previous() {
        let state = FlowState::new();
        let previous = state
            .transition(FlowStep::ThankYou, TransitionPolicy::Permissive)
            .unwrap();
        assert_eq!(previous, FlowStep::Welcome);
        assert_eq!(state.current(), FlowStep::ThankYou);
    }

    #[test]
    fn rejected_transition_leaves_state_untouched() {
        let state = FlowState::starting_at(FlowStep::Instructions);
        let err = state
            .transition(FlowStep::ThankYou, TransitionPolicy::Linear)
            .unwrap_err();
        assert_eq!(
            err,
            FlowError::TransitionRejected {
                from: FlowStep::Instructions,
                to: FlowStep::ThankYou,
            }
        );
        assert_eq!(state.current(), FlowStep::Instructions);
    }

    #[test]
    fn replace_if_only_fires_on_expected_step() {
        let state = FlowState::starting_at(FlowStep::Instructions);
        assert!(!state.replace_if(FlowStep::WaitReturn, FlowStep::ThankYou));
        assert_eq!(state.current(), FlowStep::Instructions);

        state.replace(FlowStep::WaitReturn);
        assert!(state.replace_if(FlowStep::WaitReturn, FlowStep::ThankYou));
        assert_eq!(state.current(), FlowStep::ThankYou);
    }
}
