use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::{BudgetError, Result};

use super::{expense::ExpenseRecord, folder::Folder};

/// Aggregate of one user's monthly income and expense folders.
///
/// Folder names are the map keys: unique and case-sensitive. All mutations
/// validate first and leave the budget untouched on error. Deserialization
/// goes through [`super::normalize`], which migrates legacy persisted
/// shapes into this canonical form.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Budget {
    pub income: f64,
    pub folders: BTreeMap<String, Folder>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the monthly income. Rejects non-finite and negative values.
    pub fn set_income(&mut self, amount: f64) -> Result<()> {
        if !amount.is_finite() {
            return Err(BudgetError::InvalidInput(
                "income must be a finite number".into(),
            ));
        }
        if amount < 0.0 {
            return Err(BudgetError::InvalidInput(
                "income cannot be negative".into(),
            ));
        }
        self.income = amount;
        tracing::debug!(income = amount, "income updated");
        Ok(())
    }

    /// Creates an empty folder under `name` with the given color.
    pub fn create_folder(&mut self, name: &str, color: Option<String>) -> Result<()> {
        let name = trimmed_name(name)?;
        if self.folders.contains_key(&name) {
            return Err(BudgetError::DuplicateName(name));
        }
        tracing::debug!(folder = %name, "folder created");
        self.folders.insert(
            name,
            Folder {
                expenses: Vec::new(),
                color,
            },
        );
        Ok(())
    }

    /// Moves the folder stored under `old` to `new`, keeping its expenses
    /// and color unchanged. Renaming a folder to its current name is a
    /// no-op, not an error.
    pub fn rename_folder(&mut self, old: &str, new: &str) -> Result<()> {
        let new = trimmed_name(new)?;
        if new == old {
            return Ok(());
        }
        if self.folders.contains_key(&new) {
            return Err(BudgetError::DuplicateName(new));
        }
        let folder = self
            .folders
            .remove(old)
            .ok_or_else(|| BudgetError::NotFound(old.to_string()))?;
        tracing::debug!(from = %old, to = %new, "folder renamed");
        self.folders.insert(new, folder);
        Ok(())
    }

    /// Removes the folder and all of its expenses, returning the removed
    /// folder.
    pub fn delete_folder(&mut self, name: &str) -> Result<Folder> {
        let folder = self
            .folders
            .remove(name)
            .ok_or_else(|| BudgetError::NotFound(name.to_string()))?;
        tracing::debug!(folder = %name, expenses = folder.expenses.len(), "folder deleted");
        Ok(folder)
    }

    /// Sets the display color of an existing folder. The color string is
    /// stored as given; hex validation is left to the presentation layer.
    pub fn set_folder_color(&mut self, name: &str, color: &str) -> Result<()> {
        let folder = self
            .folders
            .get_mut(name)
            .ok_or_else(|| BudgetError::NotFound(name.to_string()))?;
        folder.color = Some(color.to_string());
        Ok(())
    }

    /// Appends an expense to the named folder.
    pub fn add_expense(&mut self, folder_name: &str, expense_name: &str, amount: f64) -> Result<()> {
        let expense_name = expense_name.trim();
        if expense_name.is_empty() {
            return Err(BudgetError::InvalidInput(
                "expense name cannot be empty".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BudgetError::InvalidInput(format!(
                "expense amount must be a positive number, got {amount}"
            )));
        }
        let folder = self
            .folders
            .get_mut(folder_name)
            .ok_or_else(|| BudgetError::NotFound(folder_name.to_string()))?;
        folder
            .expenses
            .push(ExpenseRecord::new(expense_name, amount));
        tracing::debug!(folder = %folder_name, expense = %expense_name, amount, "expense added");
        Ok(())
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.get(name)
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Sum of all expense amounts across all folders. Never negative.
    pub fn total_spent(&self) -> f64 {
        self.folders.values().map(Folder::total).sum()
    }

    /// Income minus total spent. May be negative; no floor is enforced.
    pub fn available(&self) -> f64 {
        self.income - self.total_spent()
    }
}

fn trimmed_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::EmptyName);
    }
    Ok(trimmed.to_string())
}
