//! JSON configuration file for Windows.
//!
//! Settings live in %APPDATA%/WindowWrangler/config.json. The file is only
//! ever read; a missing or broken file means defaults.

use std::fs::{self, File};
use std::path::PathBuf;

use log::{info, warn};

use crate::model::constants::APP_DIR_NAME;
use crate::model::Settings;

/// %APPDATA%/WindowWrangler
pub fn app_dir() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join(APP_DIR_NAME)
}

/// %APPDATA%/WindowWrangler/config.json
pub fn config_path() -> PathBuf {
    app_dir().join("config.json")
}

/// %APPDATA%/WindowWrangler/wrangler.log
pub fn log_path() -> PathBuf {
    app_dir().join("wrangler.log")
}

/// Create (truncating) the session log file.
///
/// Returns `None` if the directory or file cannot be created.
pub fn open_log_file() -> Option<File> {
    fs::create_dir_all(app_dir()).ok()?;
    File::create(log_path()).ok()
}

/// Load settings from the config file, falling back to defaults.
pub fn load_settings() -> Settings {
    let path = config_path();
    if !path.exists() {
        info!("no config at {}, using defaults", path.display());
        return Settings::default();
    }
    match Settings::load(&path) {
        Ok(settings) => {
            info!("loaded config from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("{e}; using defaults");
            Settings::default()
        }
    }
}
