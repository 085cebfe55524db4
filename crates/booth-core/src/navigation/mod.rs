//! Link-open policy for the booth shell.
//!
//! Web links opened by the embedded notebook tool must stay inside the kiosk:
//! they get their own chrome-less window instead of the system browser, which
//! would expose an address bar to visitors.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDecision {
    /// Open in a new in-app window without browser chrome or booth IPC access.
    OpenInKioskWindow,
    /// Hand the link to the system opener (mailto:, tel:, custom schemes...).
    HandOffToSystem,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkPolicy;

impl LinkPolicy {
    pub fn decide(&self, url: &str) -> LinkDecision {
        let scheme = url
            .split_once(':')
            .map(|(scheme, _)| scheme.trim().to_ascii_lowercase());
        match scheme.as_deref() {
            Some("http") | Some("https") => LinkDecision::OpenInKioskWindow,
            _ => LinkDecision::HandOffToSystem,
        }
    }
}
