use std::collections::BTreeMap;

use super::model::*;

pub const DEFAULT_WINDOW_TITLE: &str = "NotebookLM Booth";
pub const DEFAULT_DEV_URL: &str = "http://localhost:5173";
/// Android package of the NotebookLM app.
pub const DEFAULT_NOTEBOOK_PACKAGE: &str = "com.google.android.apps.labs.language.tailwind";

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: 1200.0,
            height: 800.0,
            fullscreen: false,
            dev_url: DEFAULT_DEV_URL.to_string(),
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_NOTEBOOK_PACKAGE.to_string(),
            desktop: BTreeMap::new(),
        }
    }
}
