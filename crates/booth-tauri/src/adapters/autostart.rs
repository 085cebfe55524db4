use anyhow::Result;
use booth_core::ports::AutostartPort;
use tauri::{AppHandle, Runtime};
use tauri_plugin_autostart::ManagerExt as _;

/// Launch-on-login through `tauri-plugin-autostart`.
pub struct TauriAutostart<R: Runtime> {
    app_handle: AppHandle<R>,
}

impl<R: Runtime> TauriAutostart<R> {
    pub(crate) fn new(app_handle: AppHandle<R>) -> Self {
        Self { app_handle }
    }
}

impl<R: Runtime> AutostartPort for TauriAutostart<R> {
    fn is_enabled(&self) -> Result<bool> {
        self.app_handle
            .autolaunch()
            .is_enabled()
            .map_err(anyhow::Error::from)
    }

    fn enable(&self) -> Result<()> {
        self.app_handle.autolaunch().enable()?;
        Ok(())
    }

    fn disable(&self) -> Result<()> {
        self.app_handle.autolaunch().disable()?;
        Ok(())
    }
}
