//! Session facade that ties one user's in-memory budget to its storage.

use crate::budget::{chart_series, Budget, ChartSlice, Folder};
use crate::errors::Result;
use crate::storage::StorageBackend;

/// Coordinates a single user's [`Budget`] with persistence.
///
/// Every mutation applies in memory first, then writes the full current
/// state through the backend. Saves happen in mutation order, so the most
/// recently submitted state always wins. When a save fails the in-memory
/// change is kept and the error surfaces to the caller, who may retry with
/// [`BudgetSession::persist`]. Reads always see the latest in-memory state.
pub struct BudgetSession {
    user: String,
    budget: Budget,
    storage: Box<dyn StorageBackend>,
}

impl BudgetSession {
    /// Opens a session for `user`, loading (or bootstrapping) their budget
    /// and recording them as the last opened profile.
    pub fn open(storage: Box<dyn StorageBackend>, user: impl Into<String>) -> Result<Self> {
        let user = user.into();
        let budget = storage.load(&user)?;
        storage.record_last_user(Some(&user))?;
        tracing::info!(user = %user, folders = budget.folder_count(), "session opened");
        Ok(Self {
            user,
            budget,
            storage,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn set_income(&mut self, amount: f64) -> Result<()> {
        self.budget.set_income(amount)?;
        self.persist()
    }

    pub fn create_folder(&mut self, name: &str, color: Option<String>) -> Result<()> {
        self.budget.create_folder(name, color)?;
        self.persist()
    }

    pub fn rename_folder(&mut self, old: &str, new: &str) -> Result<()> {
        self.budget.rename_folder(old, new)?;
        self.persist()
    }

    pub fn delete_folder(&mut self, name: &str) -> Result<()> {
        self.budget.delete_folder(name)?;
        self.persist()
    }

    pub fn set_folder_color(&mut self, name: &str, color: &str) -> Result<()> {
        self.budget.set_folder_color(name, color)?;
        self.persist()
    }

    pub fn add_expense(&mut self, folder: &str, name: &str, amount: f64) -> Result<()> {
        self.budget.add_expense(folder, name, amount)?;
        self.persist()
    }

    /// Writes the current in-memory state through the backend.
    pub fn persist(&self) -> Result<()> {
        self.storage.save(&self.budget, &self.user)
    }

    /// Writes a timestamped snapshot of the current state.
    pub fn backup(&self, note: Option<&str>) -> Result<()> {
        self.storage.backup(&self.budget, &self.user, note)
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.budget.folder(name)
    }

    pub fn total_spent(&self) -> f64 {
        self.budget.total_spent()
    }

    pub fn available(&self) -> f64 {
        self.budget.available()
    }

    pub fn chart_series(&self) -> Vec<ChartSlice> {
        chart_series(&self.budget)
    }
}
