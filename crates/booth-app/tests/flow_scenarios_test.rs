//! Visitor flow scenarios exercised through the assembled `BoothApp`.

use std::sync::{Arc, Mutex};

use booth_app::{AppBuilder, BoothApp};
use booth_core::{
    flow::{FlowError, FlowStep},
    launcher::{LaunchError, PackageName},
    ports::{FlowEventPort, LauncherPort},
    BoothConfig,
};

#[derive(Default)]
struct RecordingFlowEvents {
    emitted: Mutex<Vec<FlowStep>>,
}

#[async_trait::async_trait]
impl FlowEventPort for RecordingFlowEvents {
    async fn emit_step_changed(&self, step: FlowStep) -> anyhow::Result<()> {
        self.emitted.lock().unwrap().push(step);
        Ok(())
    }
}

/// Launcher for a device where nothing is installed.
struct EmptyDeviceLauncher;

#[async_trait::async_trait]
impl LauncherPort for EmptyDeviceLauncher {
    async fn launch_app(&self, package: &PackageName) -> Result<(), LaunchError> {
        Err(LaunchError::NotInstalled(package.to_string()))
    }
}

fn booth(config: BoothConfig) -> (BoothApp, Arc<RecordingFlowEvents>) {
    let events = Arc::new(RecordingFlowEvents::default());
    let app = AppBuilder::new(config)
        .with_launcher(Arc::new(EmptyDeviceLauncher))
        .with_flow_events(events.clone())
        .build()
        .expect("booth app builds");
    (app, events)
}

#[tokio::test]
async fn set_step_then_read_returns_the_step_for_every_step() {
    let (app, _) = booth(BoothConfig::default());
    for step in FlowStep::ALL {
        app.flow.set_step(step).await.unwrap();
        assert_eq!(app.flow.current(), step);
    }
}

#[tokio::test]
async fn reset_yields_welcome_from_every_step() {
    let (app, _) = booth(BoothConfig::default());
    for step in FlowStep::ALL {
        app.flow.set_step(step).await.unwrap();
        assert_eq!(app.flow.reset().await, FlowStep::Welcome);
        assert_eq!(app.flow.current(), FlowStep::Welcome);
    }
}

#[tokio::test]
async fn full_visitor_journey_produces_expected_sequence() {
    let (app, events) = booth(BoothConfig::default());
    let mut observed = vec![app.flow.current()];

    for step in [FlowStep::Instructions, FlowStep::WaitReturn, FlowStep::ThankYou] {
        app.flow.set_step(step).await.unwrap();
        observed.push(app.flow.current());
    }
    app.flow.reset().await;
    observed.push(app.flow.current());

    assert_eq!(
        observed,
        vec![
            FlowStep::Welcome,
            FlowStep::Instructions,
            FlowStep::WaitReturn,
            FlowStep::ThankYou,
            FlowStep::Welcome,
        ]
    );
    assert_eq!(events.emitted.lock().unwrap().as_slice(), &observed[1..]);
}

#[tokio::test]
async fn set_welcome_at_welcome_is_idempotent() {
    let (app, _) = booth(BoothConfig::default());
    app.flow.set_step(FlowStep::Welcome).await.unwrap();
    app.flow.set_step(FlowStep::Welcome).await.unwrap();
    assert_eq!(app.flow.current(), FlowStep::Welcome);
}

#[tokio::test]
async fn wait_return_then_reset_scenario() {
    let (app, _) = booth(BoothConfig::default());
    assert_eq!(app.flow.current(), FlowStep::Welcome);
    app.flow.set_step(FlowStep::WaitReturn).await.unwrap();
    assert_eq!(app.flow.current(), FlowStep::WaitReturn);
    app.flow.reset().await;
    assert_eq!(app.flow.current(), FlowStep::Welcome);
}

#[tokio::test]
async fn launching_absent_app_fails_without_touching_flow() {
    let (app, events) = booth(BoothConfig::default());
    app.flow.set_step(FlowStep::Instructions).await.unwrap();

    let result = app
        .launch_app
        .execute("com.google.android.apps.labs.language.tailwind")
        .await;

    assert_eq!(
        result,
        Err(LaunchError::NotInstalled(
            "com.google.android.apps.labs.language.tailwind".to_string()
        ))
    );
    assert_eq!(app.flow.current(), FlowStep::Instructions);
    assert_eq!(events.emitted.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn strict_config_rejects_skipping_ahead() {
    let mut config = BoothConfig::default();
    config.flow.strict_transitions = true;
    let (app, _) = booth(config);

    assert_eq!(
        app.flow.set_step(FlowStep::ThankYou).await,
        Err(FlowError::TransitionRejected {
            from: FlowStep::Welcome,
            to: FlowStep::ThankYou,
        })
    );
    assert_eq!(app.flow.current(), FlowStep::Welcome);
}

#[tokio::test]
async fn concurrent_writers_leave_a_valid_step() {
    let (app, _) = booth(BoothConfig::default());
    let flow = app.flow.clone();

    let mut handles = Vec::new();
    for i in 0..32usize {
        let flow = flow.clone();
        handles.push(tokio::spawn(async move {
            flow.set_step(FlowStep::ALL[i % 4]).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert!(FlowStep::ALL.contains(&flow.current()));
}
