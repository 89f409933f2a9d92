use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".folder_budget";
const BUDGET_DIR: &str = "budgets";
const BACKUP_DIR: &str = "backups";
const STATE_FILE: &str = "state.json";

/// Returns the application data directory, defaulting to `~/.folder_budget`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FOLDER_BUDGET_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding one JSON file per user budget.
pub fn budgets_dir_in(base: &Path) -> PathBuf {
    base.join(BUDGET_DIR)
}

/// Base directory for backup snapshots.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Path to the shared state file (tracking the last opened user).
pub fn state_file_in(base: &Path) -> PathBuf {
    base.join(STATE_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
