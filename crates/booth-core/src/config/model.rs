use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::flow::TransitionPolicy;

/// Root of `booth.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoothConfig {
    pub window: WindowConfig,
    pub flow: FlowConfig,
    pub launcher: LauncherConfig,
    pub kiosk: KioskConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub fullscreen: bool,
    /// Frontend dev server, only used for development runs.
    pub dev_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub strict_transitions: bool,
    /// Move WAIT_RETURN to THANK_YOU when the booth window regains focus.
    pub advance_on_return: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Package the "open notebook" button hands off to.
    pub package_name: String,
    /// Desktop stand-ins for package identifiers, keyed by package name.
    pub desktop: BTreeMap<String, DesktopLaunchCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopLaunchCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    pub autostart: bool,
}

impl BoothConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn transition_policy(&self) -> TransitionPolicy {
        TransitionPolicy::from_strict_flag(self.flow.strict_transitions)
    }
}
