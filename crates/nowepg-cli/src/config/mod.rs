//! Application configuration module.
//!
//! Manages TOML-based config files for persistent fetch settings such
//! as the window length and endpoint host override.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use paths::resolve_config_path;
