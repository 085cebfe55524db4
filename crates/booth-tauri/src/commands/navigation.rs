//! Link handling for content inside the booth.
//!
//! Views may call `open_link` directly. Native `window.open` and
//! `target="_blank"` requests are caught by the window new-window handler and
//! take the same route (see `bootstrap::window`).

use booth_core::navigation::LinkDecision;
use tauri::{AppHandle, Runtime};

use super::{map_err, CommandError};
use crate::bootstrap::window::route_link;

/// Route a link clicked inside the booth
/// 路由展台内点击的链接
///
/// ## Architecture / 架构
///
/// Shares `route_link` with the new-window handler, so both paths apply the
/// same `LinkPolicy`. Returns the decision that was carried out.
/// 与新窗口处理器共用 `route_link`，两条路径应用同一 `LinkPolicy`。
#[tauri::command]
pub async fn open_link<R: Runtime>(
    app_handle: AppHandle<R>,
    url: String,
) -> Result<LinkDecision, CommandError> {
    tracing::info!(%url, "open link requested");
    route_link(&app_handle, &url).map_err(map_err)
}
