use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".ordino";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";

/// Returns the application data directory, defaulting to `~/.ordino`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ORDINO_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default location of the JSON snapshot files.
pub fn default_data_dir() -> PathBuf {
    app_data_dir().join(DATA_DIR)
}
