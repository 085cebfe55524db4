use serde::{Deserialize, Serialize};

use super::LaunchError;

/// Platform package identifier, e.g. `com.google.android.apps.labs.language.tailwind`.
///
/// Only the shape the booth relies on is checked here: non-empty and free of
/// whitespace. Everything else is defined by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, LaunchError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LaunchError::MissingPackageName);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(LaunchError::InvalidPackageName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackageName {
    type Error = LaunchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
