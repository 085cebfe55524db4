use std::sync::Arc;

use booth_core::{
    ports::{AutostartPort, FlowEventPort, LauncherPort},
    BoothConfig,
};

use crate::usecases::{
    flow::{FlowOrchestrator, FlowState},
    launch_app::LaunchExternalApp,
    KioskAutostart,
};

/// Builder for assembling the booth application.
///
/// Platform adapters only exist once the Tauri setup phase has an `AppHandle`,
/// so they are injected here rather than at construction.
pub struct AppBuilder {
    config: BoothConfig,
    launcher: Option<Arc<dyn LauncherPort>>,
    flow_events: Option<Arc<dyn FlowEventPort>>,
    autostart: Option<Arc<dyn AutostartPort>>,
}

impl AppBuilder {
    pub fn new(config: BoothConfig) -> Self {
        Self {
            config,
            launcher: None,
            flow_events: None,
            autostart: None,
        }
    }

    pub fn with_launcher(mut self, launcher: Arc<dyn LauncherPort>) -> Self {
        self.launcher = Some(launcher);
        self
    }

    pub fn with_flow_events(mut self, flow_events: Arc<dyn FlowEventPort>) -> Self {
        self.flow_events = Some(flow_events);
        self
    }

    /// Optional: mobile builds have no autostart.
    pub fn with_autostart(mut self, autostart: Arc<dyn AutostartPort>) -> Self {
        self.autostart = Some(autostart);
        self
    }

    pub fn build(self) -> anyhow::Result<BoothApp> {
        let launcher = self
            .launcher
            .ok_or_else(|| anyhow::anyhow!("LauncherPort is required"))?;
        let flow_events = self
            .flow_events
            .ok_or_else(|| anyhow::anyhow!("FlowEventPort is required"))?;

        let flow = FlowOrchestrator::new(
            Arc::new(FlowState::new()),
            self.config.transition_policy(),
            flow_events,
        )
        .with_advance_on_return(self.config.flow.advance_on_return);

        let launch_app = LaunchExternalApp::new(launcher, self.config.launcher.package_name.clone());

        Ok(BoothApp {
            flow: Arc::new(flow),
            launch_app: Arc::new(launch_app),
            autostart: self.autostart.map(KioskAutostart::new).map(Arc::new),
            config: Arc::new(self.config),
        })
    }
}

/// The assembled booth application, shared with Tauri as managed state.
pub struct BoothApp {
    pub flow: Arc<FlowOrchestrator>,
    pub launch_app: Arc<LaunchExternalApp>,
    pub autostart: Option<Arc<KioskAutostart>>,
    pub config: Arc<BoothConfig>,
}

impl BoothApp {
    /// Startup hooks that depend on configuration.
    ///
    /// `kiosk.autostart = false` leaves an operator-made registration alone.
    pub fn apply_kiosk_settings(&self) -> anyhow::Result<()> {
        if let (true, Some(autostart)) = (self.config.kiosk.autostart, &self.autostart) {
            autostart.set_enabled(true)?;
        }
        Ok(())
    }
}
