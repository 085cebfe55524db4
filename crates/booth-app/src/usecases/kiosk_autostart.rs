use std::sync::Arc;

use booth_core::ports::AutostartPort;

/// Launch-on-login registration for the kiosk.
pub struct KioskAutostart {
    autostart: Arc<dyn AutostartPort>,
}

impl KioskAutostart {
    pub fn new(autostart: Arc<dyn AutostartPort>) -> Self {
        Self { autostart }
    }

    pub fn is_enabled(&self) -> anyhow::Result<bool> {
        self.autostart.is_enabled()
    }

    /// Brings the OS registration in line with `wanted`.
    ///
    /// Returns `true` when the registration was changed.
    pub fn set_enabled(&self, wanted: bool) -> anyhow::Result<bool> {
        if self.autostart.is_enabled()? == wanted {
            return Ok(false);
        }
        if wanted {
            self.autostart.enable()?;
        } else {
            self.autostart.disable()?;
        }
        tracing::info!(enabled = wanted, "kiosk autostart updated");
        Ok(true)
    }
}
