//! Migration of persisted budget state into the canonical in-memory shape.
//!
//! Earlier releases stored a folder as a bare array of expenses with no
//! color, and older files carry Portuguese field names (`renda`, `pastas`,
//! `despesas`). Every load funnels through [`normalize_budget`], which is
//! idempotent over already-canonical data.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{budget::Budget, expense::ExpenseRecord, folder::Folder};

impl<'de> Deserialize<'de> for Budget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(normalize_budget(&value))
    }
}

/// Normalizes raw persisted state into a canonical [`Budget`].
pub fn normalize_budget(raw: &Value) -> Budget {
    let income = field(raw, "income", "renda")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let mut folders = BTreeMap::new();
    if let Some(map) = field(raw, "folders", "pastas").and_then(Value::as_object) {
        for (name, folder) in map {
            folders.insert(name.clone(), normalize_folder(folder));
        }
    }
    Budget { income, folders }
}

fn field<'a>(raw: &'a Value, canonical: &str, legacy: &str) -> Option<&'a Value> {
    raw.get(canonical).or_else(|| raw.get(legacy))
}

/// Normalizes one raw folder value.
///
/// Precedence: a bare array is a colorless folder of expenses; an object
/// contributes its `expenses` array (empty when absent or not an array) and
/// its `color` string when present; any other shape becomes an empty
/// folder.
pub fn normalize_folder(raw: &Value) -> Folder {
    match raw {
        Value::Array(entries) => Folder {
            expenses: parse_expenses(entries),
            color: None,
        },
        Value::Object(map) => {
            let expenses = map
                .get("expenses")
                .or_else(|| map.get("despesas"))
                .and_then(Value::as_array)
                .map(|entries| parse_expenses(entries))
                .unwrap_or_default();
            let color = map
                .get("color")
                .and_then(Value::as_str)
                .map(str::to_string);
            Folder { expenses, color }
        }
        _ => Folder::default(),
    }
}

/// Entries that do not parse as expense records are skipped rather than
/// failing the whole load.
fn parse_expenses(entries: &[Value]) -> Vec<ExpenseRecord> {
    entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_becomes_colorless_folder() {
        let raw = json!([{ "name": "Lunch", "amount": 25.5 }]);
        let folder = normalize_folder(&raw);
        assert_eq!(folder.expenses.len(), 1);
        assert_eq!(folder.color, None);
    }

    #[test]
    fn object_shape_keeps_expenses_and_color() {
        let raw = json!({
            "expenses": [{ "name": "Rent", "amount": 900.0 }],
            "color": "#112233"
        });
        let folder = normalize_folder(&raw);
        assert_eq!(folder.expenses[0].name, "Rent");
        assert_eq!(folder.color.as_deref(), Some("#112233"));
    }

    #[test]
    fn legacy_portuguese_fields_are_accepted() {
        let raw = json!({
            "despesas": [{ "nome": "Aluguel", "valor": 900.0 }],
            "color": "#445566"
        });
        let folder = normalize_folder(&raw);
        assert_eq!(folder.expenses[0].name, "Aluguel");
        assert_eq!(folder.expenses[0].amount, 900.0);
        assert_eq!(folder.color.as_deref(), Some("#445566"));
    }

    #[test]
    fn color_survives_even_when_expenses_field_is_malformed() {
        let raw = json!({ "expenses": 5, "color": "#abcdef" });
        let folder = normalize_folder(&raw);
        assert!(folder.expenses.is_empty());
        assert_eq!(folder.color.as_deref(), Some("#abcdef"));
    }

    #[test]
    fn non_string_colors_are_dropped() {
        let raw = json!({ "expenses": [], "color": 42 });
        let folder = normalize_folder(&raw);
        assert_eq!(folder.color, None);
    }

    #[test]
    fn unknown_shapes_become_empty_folders() {
        for raw in [json!(null), json!(42), json!("oops")] {
            let folder = normalize_folder(&raw);
            assert!(folder.expenses.is_empty());
            assert_eq!(folder.color, None);
        }
    }

    #[test]
    fn malformed_expense_entries_are_skipped() {
        let raw = json!([
            { "name": "Good", "amount": 10.0 },
            { "name": "Bad amount", "amount": "ten" },
            "not even an object"
        ]);
        let folder = normalize_folder(&raw);
        assert_eq!(folder.expenses.len(), 1);
        assert_eq!(folder.expenses[0].name, "Good");
    }

    #[test]
    fn normalization_is_idempotent_over_all_legacy_shapes() {
        let shapes = [
            json!([{ "name": "Lunch", "amount": 25.5 }]),
            json!({ "despesas": [{ "nome": "Luz", "valor": 80.0 }] }),
            json!({ "expenses": [{ "name": "Lunch", "amount": 25.5 }], "color": "#61dafb" }),
        ];
        for raw in shapes {
            let once = normalize_folder(&raw);
            let reserialized = serde_json::to_value(&once).expect("serialize folder");
            let twice = normalize_folder(&reserialized);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn budget_deserializes_legacy_top_level_fields() {
        let data = json!({
            "renda": 3200.0,
            "pastas": {
                "Mercado": [{ "nome": "Feira", "valor": 120.0 }]
            }
        });
        let budget: Budget = serde_json::from_value(data).expect("deserialize");
        assert_eq!(budget.income, 3200.0);
        let folder = budget.folder("Mercado").expect("folder");
        assert_eq!(folder.expenses[0].name, "Feira");
    }

    #[test]
    fn canonical_fields_win_over_legacy_ones() {
        let data = json!({
            "income": 500.0,
            "renda": 3200.0,
            "folders": {},
            "pastas": { "Velha": [] }
        });
        let budget = normalize_budget(&data);
        assert_eq!(budget.income, 500.0);
        assert_eq!(budget.folder_count(), 0);
    }

    #[test]
    fn budget_defaults_when_fields_are_missing() {
        let budget: Budget = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(budget.income, 0.0);
        assert_eq!(budget.folder_count(), 0);
    }
}
