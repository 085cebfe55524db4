use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use booth_core::{
    launcher::{LaunchError, PackageName},
    ports::LauncherPort,
};

/// Hands the visitor off to an external application.
///
/// A single attempt per call; failures are returned to the caller as-is.
/// Flow state is never touched here: moving to WAIT_RETURN is the caller's
/// decision.
pub struct LaunchExternalApp {
    launcher: Arc<dyn LauncherPort>,
    configured_package: String,
}

impl LaunchExternalApp {
    pub fn new(launcher: Arc<dyn LauncherPort>, configured_package: impl Into<String>) -> Self {
        Self {
            launcher,
            configured_package: configured_package.into(),
        }
    }

    pub async fn execute(&self, raw_package: &str) -> Result<(), LaunchError> {
        let package = PackageName::parse(raw_package).map_err(|err| {
            warn!(error = %err, raw_package, "rejected launch request");
            err
        })?;

        let span = info_span!("usecase.launch_app.execute", package = %package);
        async {
            match self.launcher.launch_app(&package).await {
                Ok(()) => {
                    info!("external app launched");
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, code = err.code(), "external app launch failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    pub fn configured_package(&self) -> &str {
        &self.configured_package
    }

    /// Launch the package named in `launcher.package_name`.
    pub async fn execute_configured(&self) -> Result<(), LaunchError> {
        self.execute(&self.configured_package).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Launcher {}

        #[async_trait::async_trait]
        impl LauncherPort for Launcher {
            async fn launch_app(&self, package: &PackageName) -> Result<(), LaunchError>;
        }
    }

    #[tokio::test]
    async fn forwards_validated_package_to_launcher() {
        let mut launcher = MockLauncher::new();
        launcher
            .expect_launch_app()
            .with(eq(PackageName::parse("com.example.notes").unwrap()))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LaunchExternalApp::new(Arc::new(launcher), "unused");
        assert_eq!(use_case.execute(" com.example.notes ").await, Ok(()));
    }

    #[tokio::test]
    async fn empty_package_never_reaches_launcher() {
        let mut launcher = MockLauncher::new();
        launcher.expect_launch_app().never();

        let use_case = LaunchExternalApp::new(Arc::new(launcher), "unused");
        assert_eq!(
            use_case.execute("").await,
            Err(LaunchError::MissingPackageName)
        );
    }

    #[tokio::test]
    async fn launcher_failure_is_returned_once_without_retry() {
        let mut launcher = MockLauncher::new();
        launcher
            .expect_launch_app()
            .times(1)
            .returning(|package| Err(LaunchError::NotInstalled(package.to_string())));

        let use_case = LaunchExternalApp::new(Arc::new(launcher), "unused");
        assert_eq!(
            use_case.execute("com.absent").await,
            Err(LaunchError::NotInstalled("com.absent".to_string()))
        );
    }

    #[tokio::test]
    async fn execute_configured_uses_configured_package() {
        let mut launcher = MockLauncher::new();
        launcher
            .expect_launch_app()
            .withf(|package| package.as_str() == "com.example.configured")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LaunchExternalApp::new(Arc::new(launcher), "com.example.configured");
        assert!(use_case.execute_configured().await.is_ok());
    }
}
