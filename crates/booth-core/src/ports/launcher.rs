use crate::launcher::{LaunchError, PackageName};

/// Asks the host platform to bring a named application to the foreground.
///
/// One best-effort attempt per call. Implementations report every failure as a
/// [`LaunchError`] and never panic.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LauncherPort: Send + Sync {
    async fn launch_app(&self, package: &PackageName) -> Result<(), LaunchError>;
}
