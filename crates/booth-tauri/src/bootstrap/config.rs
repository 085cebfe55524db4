//! # Configuration Loader
//!
//! Reads `booth.toml` and maps it onto [`BoothConfig`]. Defaults for missing
//! keys live in `booth_core::config`; nothing here validates values.

use std::path::{Path, PathBuf};

use anyhow::Context;
use booth_core::{ports::AppDirsPort, BoothConfig};
use booth_platform::DirsAppDirsAdapter;

/// Environment override for the config file location.
pub const CONFIG_PATH_ENV: &str = "BOOTH_CONFIG";

/// `BOOTH_CONFIG` if set, otherwise `<app data>/booth.toml`.
pub fn config_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    Ok(app_dirs.config_file())
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid booth config.
pub fn load_config(config_path: &Path) -> anyhow::Result<BoothConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    BoothConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Like [`load_config`], but a missing file means "use defaults".
///
/// A file that exists but does not parse is still an error; a booth should not
/// silently come up with a different launcher target than the operator wrote.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<BoothConfig> {
    if !config_path.exists() {
        tracing::info!(path = %config_path.display(), "no config file, using defaults");
        return Ok(BoothConfig::default());
    }
    load_config(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_config_reads_valid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
                [window]
                title = "Lobby Booth"
                fullscreen = true

                [launcher]
                package_name = "com.example.notes"

                [kiosk]
                autostart = true
                "#,
            )
            .unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.window.title, "Lobby Booth");
        assert!(config.window.fullscreen);
        assert_eq!(config.launcher.package_name, "com.example.notes");
        assert!(config.kiosk.autostart);
    }

    #[test]
    fn load_config_reports_parse_errors_with_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[window\ntitle = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("booth.toml");

        assert!(load_config(&path).is_err());
        assert_eq!(load_config_or_default(&path).unwrap(), BoothConfig::default());
    }

    #[test]
    fn broken_file_is_not_replaced_by_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[flow]\nstrict_transitions = \"yes\"").unwrap();

        assert!(load_config_or_default(temp_file.path()).is_err());
    }
}
