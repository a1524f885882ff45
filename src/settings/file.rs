//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::Settings;
use crate::error::{Error, Result};

pub const CONFIG_DIR_ENV: &str = "VAULTPASS_CONFIG_DIR";
const SETTINGS_FILE: &str = "settings.json";

/// `$VAULTPASS_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "vaultpass")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::NoConfigDir)
}

/// Missing file means defaults.
pub fn load(dir: &Path) -> Result<Settings> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save(settings: &Settings, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(SETTINGS_FILE);
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(&path, content)?;
    Ok(path)
}
