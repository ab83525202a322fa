use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const HOME_ENV: &str = "PESOGROW_HOME";
const DEFAULT_DIR_NAME: &str = ".pesogrow";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";
const BANKS_FILE: &str = "banksData.json";

/// Returns the application data directory, `$PESOGROW_HOME` or `~/.pesogrow`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Bank file shipped next to the binary's working directory.
pub fn default_banks_file() -> PathBuf {
    PathBuf::from(DATA_DIR).join(BANKS_FILE)
}
