pub mod json_backend;
pub mod paths;

use crate::budget::Budget;
use crate::errors::Result;

/// Abstraction over persistence backends capable of storing per-user
/// budgets and snapshots.
pub trait StorageBackend: Send + Sync {
    /// Loads the budget stored for `user`, bootstrapping and persisting a
    /// default one on first access.
    fn load(&self, user: &str) -> Result<Budget>;

    /// Overwrites the entire stored state for `user`.
    fn save(&self, budget: &Budget, user: &str) -> Result<()>;

    /// Writes a timestamped snapshot of the budget, pruned to the backend's
    /// retention limit.
    fn backup(&self, budget: &Budget, user: &str, note: Option<&str>) -> Result<()>;

    /// Lists backup file names for `user`, newest first.
    fn list_backups(&self, user: &str) -> Result<Vec<String>>;

    /// The most recently opened user profile, if any.
    fn last_user(&self) -> Result<Option<String>>;

    /// Records (or clears) the most recently opened user profile.
    fn record_last_user(&self, user: Option<&str>) -> Result<()>;
}

pub use json_backend::JsonStorage;
