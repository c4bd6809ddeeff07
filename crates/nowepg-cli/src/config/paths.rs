//! Config file location.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path for a run.
///
/// An explicit `dir` (the `--dir` flag) wins outright and is used as
/// the config directory itself. Otherwise the XDG convention applies:
/// `$XDG_CONFIG_HOME/nowepg/config.toml` when set and non-empty, else
/// `$HOME/.config/nowepg/config.toml`.
///
/// # Errors
///
/// Returns an error when no explicit directory was given and neither
/// `XDG_CONFIG_HOME` nor `HOME` is set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let base = config_base(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )?;
    Ok(base.join("nowepg").join(CONFIG_FILE))
}

/// Picks the base config directory from the environment.
///
/// An empty `XDG_CONFIG_HOME` counts as unset, per the XDG base
/// directory specification.
fn config_base(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(xdg));
    }
    let home = home.context("neither XDG_CONFIG_HOME nor HOME is set")?;
    Ok(PathBuf::from(home).join(".config"))
}
