use std::sync::Arc;

use booth_app::AppBuilder;
use booth_core::{
    flow::{FlowStep, TransitionPolicy},
    launcher::{LaunchError, PackageName},
    ports::{FlowEventPort, LauncherPort},
    BoothConfig,
};

struct NoopEvents;

#[async_trait::async_trait]
impl FlowEventPort for NoopEvents {
    async fn emit_step_changed(&self, _step: FlowStep) -> anyhow::Result<()> {
        Ok(())
    }
}

struct NoopLauncher;

#[async_trait::async_trait]
impl LauncherPort for NoopLauncher {
    async fn launch_app(&self, _package: &PackageName) -> Result<(), LaunchError> {
        Ok(())
    }
}

#[test]
fn build_requires_launcher() {
    let result = AppBuilder::new(BoothConfig::default())
        .with_flow_events(Arc::new(NoopEvents))
        .build();
    let err = result.err().expect("missing launcher must fail");
    assert!(err.to_string().contains("LauncherPort"));
}

#[test]
fn build_requires_flow_events() {
    let result = AppBuilder::new(BoothConfig::default())
        .with_launcher(Arc::new(NoopLauncher))
        .build();
    let err = result.err().expect("missing event port must fail");
    assert!(err.to_string().contains("FlowEventPort"));
}

#[test]
fn build_applies_flow_config() {
    let mut config = BoothConfig::default();
    config.flow.strict_transitions = true;

    let app = AppBuilder::new(config)
        .with_launcher(Arc::new(NoopLauncher))
        .with_flow_events(Arc::new(NoopEvents))
        .build()
        .unwrap();

    assert_eq!(app.flow.policy(), TransitionPolicy::Linear);
    assert_eq!(app.flow.current(), FlowStep::Welcome);
    assert!(app.autostart.is_none());
    assert!(app.apply_kiosk_settings().is_ok());
}

struct FlagAutostart(std::sync::atomic::AtomicBool);

impl booth_core::ports::AutostartPort for FlagAutostart {
    fn is_enabled(&self) -> anyhow::Result<bool> {
        Ok(self.0.load(std::sync::atomic::Ordering::SeqCst))
    }

    fn enable(&self) -> anyhow::Result<()> {
        self.0.store(true, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn disable(&self) -> anyhow::Result<()> {
        self.0.store(false, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn kiosk_settings_register_autostart_when_configured() {
    let mut config = BoothConfig::default();
    config.kiosk.autostart = true;
    let port = Arc::new(FlagAutostart(false.into()));

    let app = AppBuilder::new(config)
        .with_launcher(Arc::new(NoopLauncher))
        .with_flow_events(Arc::new(NoopEvents))
        .with_autostart(port.clone())
        .build()
        .unwrap();

    app.apply_kiosk_settings().unwrap();
    assert!(app.autostart.as_ref().unwrap().is_enabled().unwrap());
}

#[test]
fn kiosk_settings_keep_operator_registration_when_not_configured() {
    let port = Arc::new(FlagAutostart(true.into()));

    let app = AppBuilder::new(BoothConfig::default())
        .with_launcher(Arc::new(NoopLauncher))
        .with_flow_events(Arc::new(NoopEvents))
        .with_autostart(port)
        .build()
        .unwrap();

    app.apply_kiosk_settings().unwrap();
    assert!(app.autostart.as_ref().unwrap().is_enabled().unwrap());
}
