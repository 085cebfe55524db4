use serde::Serialize;

/// Why the host platform could not bring the target application forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LaunchError {
    #[error("must provide a packageName")]
    MissingPackageName,

    #[error("invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("package not found: {0}")]
    NotInstalled(String),

    #[error("permission denied launching {0}")]
    PermissionDenied(String),

    #[error("platform error: {0}")]
    Platform(String),
}

impl LaunchError {
    /// Stable machine-readable code for the frontend.
    pub fn code(&self) -> &'static str {
        match self {
            LaunchError::MissingPackageName => "missing_package_name",
            LaunchError::InvalidPackageName(_) => "invalid_package_name",
            LaunchError::NotInstalled(_) => "not_installed",
            LaunchError::PermissionDenied(_) => "permission_denied",
            LaunchError::Platform(_) => "platform",
        }
    }

    /// Map a rejection message from the native Android launcher plugin.
    ///
    /// The plugin rejects with `"Must provide a packageName"` or
    /// `"Package not found: <id>"`; anything else is passed through.
    pub fn from_native_rejection(package: &str, message: &str) -> Self {
        let lowered = message.to_ascii_lowercase();
        if lowered.starts_with("must provide a packagename") {
            LaunchError::MissingPackageName
        } else if let Some(rest) = message.strip_prefix("Package not found:") {
            LaunchError::NotInstalled(rest.trim().to_string())
        } else if lowered.contains("permission") {
            LaunchError::PermissionDenied(package.to_string())
        } else {
            LaunchError::Platform(message.to_string())
        }
    }
}
