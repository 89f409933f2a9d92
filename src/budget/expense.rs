use serde::{Deserialize, Serialize};

/// A single expense entry inside a folder. Immutable once recorded; it only
/// goes away when its folder is deleted.
///
/// Legacy files written by earlier releases carry Portuguese field names,
/// accepted here as aliases. Canonical output always uses `name`/`amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "valor")]
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
