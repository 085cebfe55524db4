//! Autostart commands for kiosk operators.
//!
//! Mobile builds have no autostart; the commands then fail with `unsupported`.

use std::sync::Arc;

use booth_app::{usecases::KioskAutostart, BoothApp};
use tauri::State;

use super::{map_err, CommandError};

fn kiosk_autostart(app: &BoothApp) -> Result<&KioskAutostart, CommandError> {
    app.autostart
        .as_deref()
        .ok_or_else(|| CommandError::unsupported("autostart"))
}

/// Enable autostart (launch the booth on system login)
#[tauri::command]
pub async fn enable_autostart(app: State<'_, Arc<BoothApp>>) -> Result<(), CommandError> {
    kiosk_autostart(&app)?.set_enabled(true).map_err(map_err)?;
    Ok(())
}

#[tauri::command]
pub async fn disable_autostart(app: State<'_, Arc<BoothApp>>) -> Result<(), CommandError> {
    kiosk_autostart(&app)?.set_enabled(false).map_err(map_err)?;
    Ok(())
}

#[tauri::command]
pub async fn is_autostart_enabled(app: State<'_, Arc<BoothApp>>) -> Result<bool, CommandError> {
    kiosk_autostart(&app)?.is_enabled().map_err(map_err)
}
