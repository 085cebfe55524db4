//! Tauri setup phase.
//!
//! Wires the platform adapters into a [`BoothApp`], hands it to Tauri as managed
//! state, builds the main window and hooks window focus to the flow.

use std::sync::Arc;

use anyhow::Context;
use booth_app::{AppBuilder, BoothApp};
use booth_core::{ports::LauncherPort, BoothConfig};
use tauri::{App, AppHandle, Manager, Runtime, WindowEvent};

use super::window::{build_main_window, StartPage};
use crate::adapters::TauriFlowEventEmitter;

#[cfg(not(target_os = "android"))]
fn platform_launcher<R: Runtime>(
    _app: &AppHandle<R>,
    config: &BoothConfig,
) -> anyhow::Result<Arc<dyn LauncherPort>> {
    Ok(Arc::new(booth_platform::CommandLauncher::from_config(
        &config.launcher,
    )))
}

/// The `native-launcher` plugin must be registered before setup runs.
#[cfg(target_os = "android")]
fn platform_launcher<R: Runtime>(
    app: &AppHandle<R>,
    _config: &BoothConfig,
) -> anyhow::Result<Arc<dyn LauncherPort>> {
    let launcher = app
        .try_state::<crate::plugins::native_launcher::MobileLauncher<R>>()
        .context("native-launcher plugin is not registered")?;
    Ok(Arc::new(launcher.inner().clone()))
}

/// Assemble the booth against a running Tauri app.
pub fn build_booth_app<R: Runtime>(
    app: &AppHandle<R>,
    config: BoothConfig,
) -> anyhow::Result<BoothApp> {
    let launcher = platform_launcher(app, &config)?;
    let builder = AppBuilder::new(config)
        .with_launcher(launcher)
        .with_flow_events(Arc::new(TauriFlowEventEmitter::new(app.clone())));

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let builder = builder.with_autostart(Arc::new(crate::adapters::TauriAutostart::new(
        app.clone(),
    )));

    builder.build()
}

/// Body of `tauri::Builder::setup`.
pub fn setup<R: Runtime>(app: &mut App<R>, config: BoothConfig) -> anyhow::Result<()> {
    let handle = app.handle().clone();
    let booth = Arc::new(build_booth_app(&handle, config).context("Failed to assemble booth")?);

    if let Err(err) = booth.apply_kiosk_settings() {
        tracing::warn!(error = %format!("{err:#}"), "failed to apply kiosk settings");
    }

    app.manage(booth.clone());

    let start_page = StartPage::from_env(&booth.config.window);
    let window = build_main_window(&handle, &booth.config.window, &start_page)?;

    let flow = booth.flow.clone();
    window.on_window_event(move |event| {
        if let WindowEvent::Focused(true) = event {
            let flow = flow.clone();
            tauri::async_runtime::spawn(async move {
                flow.notify_visitor_returned().await;
            });
        }
    });

    tracing::info!(step = %booth.flow.current(), "booth ready");
    Ok(())
}
