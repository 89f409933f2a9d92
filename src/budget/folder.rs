use serde::Serialize;

use super::expense::ExpenseRecord;

/// Fallback display color for folders without an explicit color.
pub const DEFAULT_FOLDER_COLOR: &str = "#61dafb";

/// A named expense category: an ordered list of expenses plus an optional
/// display color. The stored color may be absent; display falls back to
/// [`DEFAULT_FOLDER_COLOR`] without persisting it.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Folder {
    pub expenses: Vec<ExpenseRecord>,
    pub color: Option<String>,
}

impl Folder {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            expenses: Vec::new(),
            color: Some(color.into()),
        }
    }

    /// Sum of this folder's expense amounts.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Color used for display, falling back to the default when unset.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_FOLDER_COLOR)
    }
}
