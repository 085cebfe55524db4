//! `native-launcher` plugin.
//!
//! On Android the plugin registers the native `NativeLauncherPlugin` class and
//! exposes it as a [`LauncherPort`] (`MobileLauncher`). The native side resolves
//! the package's launch intent and starts it with `FLAG_ACTIVITY_NEW_TASK`; it
//! rejects with `"Must provide a packageName"` or `"Package not found: <id>"`.
//!
//! On desktop the plugin registers nothing and the booth uses
//! `booth_platform::CommandLauncher` instead.

use tauri::{
    plugin::{Builder, TauriPlugin},
    Runtime,
};

pub const PLUGIN_NAME: &str = "native-launcher";

#[cfg(target_os = "android")]
const ANDROID_PLUGIN_PACKAGE: &str = "com.example.notebooklmbooth";
#[cfg(target_os = "android")]
const ANDROID_PLUGIN_CLASS: &str = "NativeLauncherPlugin";

pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .setup(|_app, _api| {
            #[cfg(target_os = "android")]
            {
                use tauri::Manager;

                let handle =
                    _api.register_android_plugin(ANDROID_PLUGIN_PACKAGE, ANDROID_PLUGIN_CLASS)?;
                _app.manage(mobile::MobileLauncher(handle));
                tracing::info!("native launcher plugin registered");
            }
            Ok(())
        })
        .build()
}

#[cfg(target_os = "android")]
pub use mobile::MobileLauncher;

#[cfg(target_os = "android")]
mod mobile {
    use async_trait::async_trait;
    use booth_core::{
        launcher::{LaunchError, PackageName},
        ports::LauncherPort,
    };
    use serde::Serialize;
    use tauri::{
        plugin::{mobile::PluginInvokeError, PluginHandle},
        Runtime,
    };

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct LaunchAppArgs {
        package_name: String,
    }

    /// [`LauncherPort`] backed by the Android plugin.
    pub struct MobileLauncher<R: Runtime>(pub(super) PluginHandle<R>);

    impl<R: Runtime> Clone for MobileLauncher<R> {
        fn clone(&self) -> Self {
            Self(self.0.clone())
        }
    }

    #[async_trait]
    impl<R: Runtime> LauncherPort for MobileLauncher<R> {
        async fn launch_app(&self, package: &PackageName) -> Result<(), LaunchError> {
            let handle = self.0.clone();
            let args = LaunchAppArgs {
                package_name: package.to_string(),
            };

            let outcome = tauri::async_runtime::spawn_blocking(move || {
                handle.run_mobile_plugin::<serde_json::Value>("launchApp", args)
            })
            .await
            .map_err(|err| LaunchError::Platform(err.to_string()))?;

            match outcome {
                Ok(_) => Ok(()),
                Err(PluginInvokeError::InvokeRejected(response)) => {
                    let message = response.message.unwrap_or_default();
                    Err(LaunchError::from_native_rejection(package.as_str(), &message))
                }
                Err(err) => Err(LaunchError::Platform(err.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_registers_on_mock_app() {
        let app = tauri::test::mock_builder()
            .plugin(init())
            .build(tauri::test::mock_context(tauri::test::noop_assets()));
        assert!(app.is_ok());
    }
}
