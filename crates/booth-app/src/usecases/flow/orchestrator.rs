//! Flow orchestrator.
//!
//! The single writer of [`FlowState`]. Every successful write is published
//! through the [`FlowEventPort`] so that all booth views re-render.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use booth_core::{
    flow::{FlowError, FlowStep, TransitionPolicy},
    ports::FlowEventPort,
};

use super::FlowState;

pub struct FlowOrchestrator {
    state: Arc<FlowState>,
    policy: TransitionPolicy,
    advance_on_return: bool,
    events: Arc<dyn FlowEventPort>,
}

impl FlowOrchestrator {
    pub fn new(
        state: Arc<FlowState>,
        policy: TransitionPolicy,
        events: Arc<dyn FlowEventPort>,
    ) -> Self {
        Self {
            state,
            policy,
            advance_on_return: false,
            events,
        }
    }

    /// Advance WAIT_RETURN to THANK_YOU from [`Self::notify_visitor_returned`].
    pub fn with_advance_on_return(mut self, enabled: bool) -> Self {
        self.advance_on_return = enabled;
        self
    }

    /// Read-only handle for views that only render.
    pub fn state(&self) -> Arc<FlowState> {
        self.state.clone()
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn current(&self) -> FlowStep {
        self.state.current()
    }

    /// Overwrite the current step.
    ///
    /// Under [`TransitionPolicy::Permissive`] this never fails.
    pub async fn set_step(&self, step: FlowStep) -> Result<FlowStep, FlowError> {
        let span = info_span!("usecase.flow.set_step", to = %step, policy = ?self.policy);
        async {
            let from = match self.state.transition(step, self.policy) {
                Ok(from) => from,
                Err(err) => {
                    warn!(error = %err, "flow transition rejected");
                    return Err(err);
                }
            };
            info!(%from, to = %step, "flow step changed");
            self.publish(step).await;
            Ok(step)
        }
        .instrument(span)
        .await
    }

    /// Move to the next step of the journey. Stays put at THANK_YOU.
    pub async fn advance(&self) -> FlowStep {
        let current = self.current();
        let Some(next) = current.next() else {
            debug!(%current, "flow already at the last step");
            return current;
        };
        match self.set_step(next).await {
            Ok(step) => step,
            Err(_) => self.current(),
        }
    }

    /// Back to WELCOME for the next visitor, regardless of policy.
    pub async fn reset(&self) -> FlowStep {
        let from = self.state.replace(FlowStep::Welcome);
        info!(%from, "flow reset");
        self.publish(FlowStep::Welcome).await;
        FlowStep::Welcome
    }

    /// The booth regained the visitor after a hand-off.
    ///
    /// Moves WAIT_RETURN to THANK_YOU when enabled; otherwise a no-op.
    pub async fn notify_visitor_returned(&self) -> FlowStep {
        if self.advance_on_return
            && self
                .state
                .replace_if(FlowStep::WaitReturn, FlowStep::ThankYou)
        {
            info!("visitor returned from external app");
            self.publish(FlowStep::ThankYou).await;
        }
        self.current()
    }

    async fn publish(&self, step: FlowStep) {
        if let Err(err) = self.events.emit_step_changed(step).await {
            warn!(error = %err, %step, "failed to publish flow step change");
        }
    }
}
