use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::budget::Budget;
use crate::errors::Result;

use super::{
    paths::{self, ensure_dir},
    StorageBackend,
};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// JSON-file storage keyed by username, one file per user.
///
/// Saves always rewrite the whole budget through a tmp file and rename, so
/// a crash mid-write never leaves a truncated budget behind.
#[derive(Clone)]
pub struct JsonStorage {
    budgets_dir: PathBuf,
    backups_dir: PathBuf,
    state_file: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let base = root.unwrap_or_else(paths::app_data_dir);
        ensure_dir(&base)?;
        let budgets_dir = paths::budgets_dir_in(&base);
        let backups_dir = paths::backups_dir_in(&base);
        ensure_dir(&budgets_dir)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            budgets_dir,
            backups_dir,
            state_file: paths::state_file_in(&base),
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn budget_path(&self, user: &str) -> PathBuf {
        self.budgets_dir.join(format!("{}.json", slug(user)))
    }

    fn backup_dir(&self, user: &str) -> PathBuf {
        self.backups_dir.join(slug(user))
    }

    fn read_state(&self) -> Result<StoreState> {
        if self.state_file.exists() {
            let data = fs::read_to_string(&self.state_file)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(StoreState::default())
        }
    }

    fn prune_backups(&self, user: &str) -> Result<()> {
        let backups = self.list_backups(user)?;
        for name in backups.iter().skip(self.retention) {
            let _ = fs::remove_file(self.backup_dir(user).join(name));
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self, user: &str) -> Result<Budget> {
        let path = self.budget_path(user);
        if !path.exists() {
            let budget = Budget::new();
            self.save(&budget, user)?;
            tracing::info!(user, "bootstrapped budget file");
            return Ok(budget);
        }
        let data = fs::read_to_string(&path)?;
        let budget: Budget = serde_json::from_str(&data)?;
        Ok(budget)
    }

    fn save(&self, budget: &Budget, user: &str) -> Result<()> {
        let path = self.budget_path(user);
        let json = serde_json::to_string_pretty(budget)?;
        write_atomic(&path, &json)?;
        tracing::debug!(user, path = %path.display(), "budget saved");
        Ok(())
    }

    fn backup(&self, budget: &Budget, user: &str, note: Option<&str>) -> Result<()> {
        let dir = self.backup_dir(user);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut stem = format!("{}_{}", slug(user), timestamp);
        if let Some(raw) = note.map(str::trim).filter(|raw| !raw.is_empty()) {
            stem.push('_');
            stem.push_str(&slug(raw));
        }
        let path = dir.join(format!("{}.{}", stem, BACKUP_EXTENSION));
        let json = serde_json::to_string_pretty(budget)?;
        write_atomic(&path, &json)?;
        self.prune_backups(user)
    }

    fn list_backups(&self, user: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(user);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        // file names embed a sortable timestamp, newest first
        entries.sort_by(|a, b| b.cmp(a));
        Ok(entries)
    }

    fn last_user(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.last_user)
    }

    fn record_last_user(&self, user: Option<&str>) -> Result<()> {
        let mut state = self.read_state()?;
        state.last_user = user.map(str::to_string);
        let data = serde_json::to_string_pretty(&state)?;
        write_atomic(&self.state_file, &data)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    last_user: Option<String>,
}

/// Maps an arbitrary user name onto a safe file stem.
fn slug(user: &str) -> String {
    let sanitized: String = user
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "user".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
