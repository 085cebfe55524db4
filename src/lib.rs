//! NotebookLM Booth
//!
//! Entry point shared by the desktop binary and the Android library.

use booth_core::BoothConfig;
use booth_tauri::{bootstrap, commands, plugins::native_launcher};

/// Bring the running booth to the front when a second instance is started.
#[cfg(desktop)]
fn focus_main_window<R: tauri::Runtime>(app: &tauri::AppHandle<R>) {
    use tauri::Manager;

    let Some(window) = app.get_webview_window(bootstrap::MAIN_WINDOW_LABEL) else {
        tracing::warn!("second instance started before the main window existed");
        return;
    };
    if let Err(err) = window.unminimize().and_then(|_| window.show()).and_then(|_| window.set_focus()) {
        tracing::warn!(error = %err, "failed to focus main window");
    }
}

fn load_booth_config() -> anyhow::Result<BoothConfig> {
    let path = bootstrap::config_path()?;
    tracing::info!(path = %path.display(), "loading booth config");
    bootstrap::load_config_or_default(&path)
}

fn build_app(config: BoothConfig) -> tauri::Builder<tauri::Wry> {
    let builder = tauri::Builder::default();

    // Single instance must be the first plugin.
    #[cfg(desktop)]
    let builder = builder
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            focus_main_window(app)
        }))
        .plugin(tauri_plugin_autostart::init(
            tauri_plugin_autostart::MacosLauncher::LaunchAgent,
            Some(vec![]),
        ));

    builder
        .plugin(tauri_plugin_opener::init())
        .plugin(native_launcher::init())
        .setup(move |app| {
            bootstrap::setup(app, config)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::flow::get_flow_step,
            commands::flow::set_flow_step,
            commands::flow::advance_flow,
            commands::flow::reset_flow,
            commands::launcher::launch_app,
            commands::launcher::launch_configured_app,
            commands::navigation::open_link,
            commands::autostart::enable_autostart,
            commands::autostart::disable_autostart,
            commands::autostart::is_autostart_enabled,
        ])
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    #[cfg(debug_assertions)]
    let _ = dotenvy::dotenv();

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let config = match load_booth_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "failed to load booth config");
            eprintln!("Failed to load booth config: {err:#}");
            bootstrap::tracing::flush_file_log();
            std::process::exit(1);
        }
    };

    build_app(config)
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
