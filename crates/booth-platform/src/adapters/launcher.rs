//! Desktop launcher adapter.
//!
//! Desktop hosts have no package manager that understands Android package
//! identifiers, so each identifier the booth may hand off to is mapped to a
//! program in `[launcher.desktop]`. The program is spawned detached; the booth
//! does not wait for it.

use std::collections::BTreeMap;
use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::{debug, info};

use booth_core::{
    config::{DesktopLaunchCommand, LauncherConfig},
    launcher::{LaunchError, PackageName},
    ports::LauncherPort,
};

pub struct CommandLauncher {
    commands: BTreeMap<String, DesktopLaunchCommand>,
}

impl CommandLauncher {
    pub fn new(commands: BTreeMap<String, DesktopLaunchCommand>) -> Self {
        Self { commands }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.desktop.clone())
    }
}

fn map_spawn_error(package: &PackageName, err: &io::Error) -> LaunchError {
    match err.kind() {
        io::ErrorKind::NotFound => LaunchError::NotInstalled(package.to_string()),
        io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied(package.to_string()),
        _ => LaunchError::Platform(err.to_string()),
    }
}

#[async_trait]
impl LauncherPort for CommandLauncher {
    async fn launch_app(&self, package: &PackageName) -> Result<(), LaunchError> {
        let Some(command) = self.commands.get(package.as_str()) else {
            debug!(%package, "no desktop command mapped for package");
            return Err(LaunchError::NotInstalled(package.to_string()));
        };

        let mut child = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| map_spawn_error(package, &err))?;

        info!(%package, program = %command.program, pid = ?child.id(), "spawned desktop app");

        let package = package.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => debug!(%package, %status, "desktop app exited"),
                Err(err) => debug!(%package, error = %err, "lost track of desktop app"),
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher_with(package: &str, program: &str) -> CommandLauncher {
        let mut commands = BTreeMap::new();
        commands.insert(
            package.to_string(),
            DesktopLaunchCommand {
                program: program.to_string(),
                args: Vec::new(),
            },
        );
        CommandLauncher::new(commands)
    }

    #[tokio::test]
    async fn unmapped_package_is_not_installed() {
        let launcher = CommandLauncher::new(BTreeMap::new());
        let package = PackageName::parse("com.absent").unwrap();
        assert_eq!(
            launcher.launch_app(&package).await,
            Err(LaunchError::NotInstalled("com.absent".to_string()))
        );
    }

    #[tokio::test]
    async fn missing_program_is_not_installed() {
        let launcher = launcher_with("com.ghost", "/nonexistent/booth/ghost-app");
        let package = PackageName::parse("com.ghost").unwrap();
        assert_eq!(
            launcher.launch_app(&package).await,
            Err(LaunchError::NotInstalled("com.ghost".to_string()))
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn mapped_program_is_spawned() {
        let launcher = launcher_with("com.example.true", "true");
        let package = PackageName::parse("com.example.true").unwrap();
        assert_eq!(launcher.launch_app(&package).await, Ok(()));
    }

    #[test]
    fn spawn_errors_map_to_launch_errors() {
        let package = PackageName::parse("com.example").unwrap();
        assert_eq!(
            map_spawn_error(&package, &io::Error::from(io::ErrorKind::PermissionDenied)),
            LaunchError::PermissionDenied("com.example".to_string())
        );
        assert!(matches!(
            map_spawn_error(&package, &io::Error::other("boom")),
            LaunchError::Platform(_)
        ));
    }

    #[test]
    fn from_config_uses_desktop_table() {
        let mut config = LauncherConfig::default();
        config.desktop.insert(
            "com.example".to_string(),
            DesktopLaunchCommand {
                program: "xdg-open".to_string(),
                args: vec!["https://example.com".to_string()],
            },
        );
        let launcher = CommandLauncher::from_config(&config);
        assert_eq!(launcher.commands.len(), 1);
    }
}
