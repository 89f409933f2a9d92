//! End-to-end scenarios over the in-memory budget aggregate.

use folder_budget::budget::{chart_series, Budget, DEFAULT_FOLDER_COLOR};
use folder_budget::errors::BudgetError;

#[test]
fn fresh_user_flow_tracks_income_and_spending() {
    let mut budget = Budget::new();
    assert_eq!(budget.income, 0.0);
    assert_eq!(budget.folder_count(), 0);

    budget.set_income(5000.0).expect("income");
    budget
        .create_folder("Food", Some("#ff0000".into()))
        .expect("folder");
    budget.add_expense("Food", "Lunch", 25.50).expect("expense");

    assert!((budget.total_spent() - 25.50).abs() < f64::EPSILON);
    assert!((budget.available() - 4974.50).abs() < f64::EPSILON);
}

#[test]
fn duplicate_folder_creation_leaves_budget_unchanged() {
    let mut budget = Budget::new();
    budget
        .create_folder("A", Some(DEFAULT_FOLDER_COLOR.into()))
        .expect("first create");
    let snapshot = budget.clone();

    let err = budget
        .create_folder("A", Some("#000000".into()))
        .expect_err("duplicate");
    assert!(matches!(err, BudgetError::DuplicateName(_)));
    assert_eq!(budget.folder_count(), 1);
    assert_eq!(budget, snapshot);
}

#[test]
fn deleting_a_folder_removes_its_expenses_from_totals() {
    let mut budget = Budget::new();
    budget.create_folder("Food", None).expect("folder");
    budget.create_folder("Rent", None).expect("folder");
    budget.add_expense("Food", "Lunch", 30.0).expect("expense");
    budget.add_expense("Food", "Dinner", 50.0).expect("expense");
    budget.add_expense("Rent", "May", 900.0).expect("expense");

    budget.delete_folder("Food").expect("delete");
    assert!((budget.total_spent() - 900.0).abs() < f64::EPSILON);
    assert!(budget.folder("Food").is_none());
}

#[test]
fn available_identity_holds_across_mutation_sequences() {
    let mut budget = Budget::new();
    budget.set_income(3000.0).expect("income");
    budget.create_folder("Food", None).expect("folder");
    budget.create_folder("Fun", None).expect("folder");
    budget.add_expense("Food", "Groceries", 120.0).expect("expense");
    budget.add_expense("Fun", "Cinema", 18.0).expect("expense");
    budget.rename_folder("Fun", "Leisure").expect("rename");
    budget.set_folder_color("Food", "#00ff00").expect("color");
    budget.delete_folder("Leisure").expect("delete");
    budget.set_income(2500.0).expect("income again");

    assert!((budget.available() - (budget.income - budget.total_spent())).abs() < f64::EPSILON);
}

#[test]
fn rename_preserves_the_folder_exactly() {
    let mut budget = Budget::new();
    budget
        .create_folder("Food", Some("#123456".into()))
        .expect("folder");
    budget.add_expense("Food", "Lunch", 12.0).expect("expense");
    let original = budget.folder("Food").expect("present").clone();

    budget.rename_folder("Food", "Meals").expect("rename");
    assert!(budget.folder("Food").is_none());
    assert_eq!(budget.folder("Meals"), Some(&original));
}

#[test]
fn chart_series_reflects_folder_totals() {
    let mut budget = Budget::new();
    budget
        .create_folder("Food", Some("#ff0000".into()))
        .expect("folder");
    budget.add_expense("Food", "Lunch", 30.0).expect("expense");

    let series = chart_series(&budget);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "Food");
    assert!((series[0].value - 30.0).abs() < f64::EPSILON);
    assert_eq!(series[0].color, "#ff0000");
}
