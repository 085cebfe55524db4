//! Booth windows.
//!
//! The main window hosts the booth views. Web links get their own chrome-less
//! windows; the capability file only grants IPC to `main`, so those windows
//! cannot reach booth commands.
//!
//! ## New-window requests
//!
//! Every booth window (main and link windows) answers `window.open` and
//! `target="_blank"` with [`route_link`] and denies the native popup:
//!
//! ```text
//! http(s)://...  -> new link window (OpenInKioskWindow)
//! mailto:, tel:  -> system opener   (HandOffToSystem)
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use booth_core::{
    config::WindowConfig,
    navigation::{LinkDecision, LinkPolicy},
};
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_opener::OpenerExt as _;

pub const MAIN_WINDOW_LABEL: &str = "main";
const PACKAGED_ENTRY: &str = "index.html";

static LINK_WINDOW_SEQ: AtomicUsize = AtomicUsize::new(0);

/// What the main window loads on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPage {
    /// Frontend dev server (hot reload).
    DevServer(String),
    /// Bundled frontend.
    Packaged,
}

impl StartPage {
    /// `BOOTH_ENV=development|production` wins; otherwise debug builds use the
    /// dev server when one is configured.
    pub fn resolve(booth_env: Option<&str>, debug_build: bool, dev_url: &str) -> Self {
        let dev_server = || StartPage::DevServer(dev_url.to_string());
        match booth_env.map(str::trim) {
            Some("development") if !dev_url.is_empty() => dev_server(),
            Some("production") | Some("development") => StartPage::Packaged,
            _ if debug_build && !dev_url.is_empty() => dev_server(),
            _ => StartPage::Packaged,
        }
    }

    pub fn from_env(config: &WindowConfig) -> Self {
        let booth_env = std::env::var("BOOTH_ENV").ok();
        Self::resolve(
            booth_env.as_deref(),
            cfg!(debug_assertions),
            &config.dev_url,
        )
    }

    pub fn webview_url(&self) -> anyhow::Result<WebviewUrl> {
        match self {
            StartPage::DevServer(url) => {
                let parsed = url
                    .parse()
                    .with_context(|| format!("Invalid dev server url: {url}"))?;
                Ok(WebviewUrl::External(parsed))
            }
            StartPage::Packaged => Ok(WebviewUrl::App(PACKAGED_ENTRY.into())),
        }
    }
}

pub fn build_main_window<R: Runtime, M: Manager<R>>(
    manager: &M,
    config: &WindowConfig,
    start_page: &StartPage,
) -> anyhow::Result<WebviewWindow<R>> {
    tracing::info!(?start_page, "building main window");

    let builder = WebviewWindowBuilder::new(manager, MAIN_WINDOW_LABEL, start_page.webview_url()?)
        .on_navigation(|url| {
            tracing::debug!(%url, "main window navigation");
            true
        });

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let builder = builder
        .title(&config.title)
        .inner_size(config.width, config.height)
        .fullscreen(config.fullscreen)
        .focused(true)
        .on_new_window(new_window_router(manager.app_handle().clone()));

    builder.build().context("Failed to build main window")
}

fn next_link_label() -> String {
    format!("link-{}", LINK_WINDOW_SEQ.fetch_add(1, Ordering::Relaxed) + 1)
}

/// Open `url` in a new in-app window without browser chrome.
pub fn open_link_window<R: Runtime, M: Manager<R>>(
    manager: &M,
    url: &str,
) -> anyhow::Result<WebviewWindow<R>> {
    let parsed = url
        .parse()
        .with_context(|| format!("Invalid link url: {url}"))?;
    let label = next_link_label();
    tracing::info!(%label, %url, "opening link window");

    let builder = WebviewWindowBuilder::new(manager, &label, WebviewUrl::External(parsed));

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let builder = builder
        .title(url)
        .inner_size(1200.0, 800.0)
        .on_new_window(new_window_router(manager.app_handle().clone()));

    builder
        .build()
        .with_context(|| format!("Failed to build link window {label}"))
}

/// Apply [`LinkPolicy`] to `url`: web links get a link window, everything else
/// goes to the system opener.
pub fn route_link<R: Runtime>(app: &AppHandle<R>, url: &str) -> anyhow::Result<LinkDecision> {
    let decision = LinkPolicy.decide(url);
    tracing::info!(%url, ?decision, "routing link");

    match decision {
        LinkDecision::OpenInKioskWindow => {
            open_link_window(app, url)?;
        }
        LinkDecision::HandOffToSystem => {
            app.opener()
                .open_url(url, None::<&str>)
                .with_context(|| format!("System opener failed for {url}"))?;
        }
    }
    Ok(decision)
}

/// Handler for `on_new_window`. The native popup is always denied; the request
/// is re-routed off the webview callback so window creation cannot block it.
#[cfg(not(any(target_os = "android", target_os = "ios")))]
fn new_window_router<R: Runtime>(
    app: AppHandle<R>,
) -> impl Fn(tauri::Url, tauri::webview::NewWindowFeatures) -> tauri::webview::NewWindowResponse<R>
       + Send
       + Sync
       + 'static {
    move |url, _features| {
        let app = app.clone();
        let url = url.to_string();
        tauri::async_runtime::spawn(async move {
            if let Err(err) = route_link(&app, &url) {
                tracing::warn!(error = %format!("{err:#}"), %url, "new-window request failed");
            }
        });
        tauri::webview::NewWindowResponse::Deny
    }
}
