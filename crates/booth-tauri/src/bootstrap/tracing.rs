//! Tracing configuration for the booth
//!
//! - **stdout**: always
//! - **file**: `<app data>/logs/notebook-booth.log`, skipped if the directory
//!   cannot be created
//! - **Sentry**: only when `SENTRY_DSN` is set
//!
//! `RUST_LOG` overrides the default filter directives.

use std::{
    fs, io,
    sync::{Mutex, OnceLock},
};

use booth_core::ports::AppDirsPort;
use booth_platform::DirsAppDirsAdapter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, Layer};

const LOG_FILE_NAME: &str = "notebook-booth.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Dropping the guard flushes the file writer; see [`flush_file_log`].
static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// Booth crates log at debug in development, info otherwise. Tauri's own
/// setup, webview and IPC spans are muted.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let booth_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![
        booth_level.to_string(),
        "tauri=warn".to_string(),
        "wry=off".to_string(),
        "ipc::request=off".to_string(),
    ];
    directives.extend(
        [
            "booth_core",
            "booth_app",
            "booth_platform",
            "booth_tauri",
            "notebook_booth_lib",
        ]
        .iter()
        .map(|target| format!("{target}={booth_level}")),
    );
    directives
}

/// Initialize the global tracing subscriber.
///
/// Call once, before the Tauri builder runs.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let sentry_layer = match std::env::var("SENTRY_DSN") {
        Ok(dsn) if !dsn.is_empty() => {
            let guard = sentry::init((
                dsn,
                sentry::ClientOptions {
                    release: sentry::release_name!(),
                    traces_sample_rate: 1.0,
                    ..Default::default()
                },
            ));
            if SENTRY_GUARD.set(guard).is_err() {
                eprintln!("Sentry guard already initialized");
            }
            Some(sentry_tracing::layer())
        }
        _ => None,
    };

    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    let stdout_layer = booth_fmt_layer(BoxMakeWriter::new(io::stdout), cfg!(not(test)));
    let file_layer = file_writer.map(|writer| booth_fmt_layer(BoxMakeWriter::new(writer), false));

    registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// `2026-01-15 10:30:45.123  INFO booth_app::usecases::flow: src/...rs:42: message`
fn booth_fmt_layer<S>(writer: BoxMakeWriter, ansi: bool) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer)
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = DirsAppDirsAdapter::new().get_app_dirs()?.logs_dir();
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    store_log_guard(guard)?;
    Ok(non_blocking)
}

fn store_log_guard(guard: WorkerGuard) -> anyhow::Result<()> {
    let mut slot = LOG_GUARD
        .lock()
        .map_err(|_| anyhow::anyhow!("Tracing log guard poisoned"))?;
    if slot.is_some() {
        anyhow::bail!("Tracing log guard already initialized");
    }
    *slot = Some(guard);
    Ok(())
}

/// Flush and close the log file.
///
/// Statics are never dropped, so call this before `std::process::exit`.
/// Events logged afterwards only reach stdout.
pub fn flush_file_log() {
    let guard = match LOG_GUARD.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    drop(guard);
}
