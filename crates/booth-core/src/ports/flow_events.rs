use crate::flow::FlowStep;

/// Publishes flow step changes to whoever renders the booth views.
#[async_trait::async_trait]
pub trait FlowEventPort: Send + Sync {
    async fn emit_step_changed(&self, step: FlowStep) -> anyhow::Result<()>;
}
