pub mod config;
pub mod setup;
pub mod tracing;
pub mod window;

pub use config::{config_path, load_config, load_config_or_default};
pub use setup::{build_booth_app, setup};
pub use window::{StartPage, MAIN_WINDOW_LABEL};
