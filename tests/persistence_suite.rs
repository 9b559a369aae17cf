use finance_core::bootstrap::sample_state;
use finance_core::config::Theme;
use finance_core::core::services::{
    BudgetService, SummaryService, TransactionInput, TransactionService,
};
use finance_core::errors::FinanceError;
use finance_core::model::{AppState, User};
use finance_core::storage::{export_to_path, import_from_path, Snapshot, DEFAULT_EXPORT_FILE_NAME};

use chrono::NaiveDate;
use tempfile::TempDir;

fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
}

#[test]
fn export_import_roundtrip_through_a_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join(DEFAULT_EXPORT_FILE_NAME);

    let mut state = sample_state();
    TransactionService::add(
        &mut state,
        TransactionInput {
            date: sample_date(),
            description: "Bonus".into(),
            category: "Income".into(),
            amount: 750.0,
        },
    )
    .expect("add transaction");

    export_to_path(&path, &state, Theme::Dark).expect("export");
    let (imported, theme) = import_from_path(&path).expect("import");

    assert_eq!(imported, state);
    assert_eq!(theme, Theme::Dark);
    assert_eq!(
        SummaryService::overview(&imported),
        SummaryService::overview(&state)
    );
}

#[test]
fn import_replaces_the_entire_state() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("snapshot.json");

    let exported = sample_state();
    export_to_path(&path, &exported, Theme::Light).expect("export");

    // A session with entirely different contents.
    let mut current = AppState::new(User::new("Someone Else", "else@example.com"));
    BudgetService::upsert(&mut current, "Travel", 900.0).expect("budget");

    let (imported, _) = import_from_path(&path).expect("import");
    current = imported;

    assert_eq!(current, exported);
    assert!(current.budget("Travel").is_none());
}

#[test]
fn failed_import_leaves_existing_state_untouched() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ this is not json").expect("write broken file");

    let current = sample_state();
    let before = current.clone();

    let err = import_from_path(&path).expect_err("import must fail");
    assert!(matches!(err, FinanceError::MalformedSnapshot(_)));
    assert_eq!(current, before);
}

#[test]
fn snapshot_rejects_invariant_violations_found_in_the_document() {
    let state = sample_state();
    let json = Snapshot::capture(&state, Theme::Light)
        .to_json()
        .expect("serialize");

    // Corrupt the document by duplicating a goal name.
    let corrupted = json.replace("\"Vacation\"", "\"Emergency Fund\"");
    let err = Snapshot::from_json(&corrupted)
        .expect("still parses")
        .into_state()
        .expect_err("duplicate key must be rejected");
    assert!(matches!(err, FinanceError::MalformedSnapshot(_)));
}

#[test]
fn ids_keep_increasing_after_an_import() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("snapshot.json");

    let state = sample_state();
    let highest = state.transactions.iter().map(|t| t.id).max().unwrap();
    export_to_path(&path, &state, Theme::Light).expect("export");

    let (mut imported, _) = import_from_path(&path).expect("import");
    let id = TransactionService::add(
        &mut imported,
        TransactionInput {
            date: sample_date(),
            description: "Coffee".into(),
            category: "Food".into(),
            amount: -4.5,
        },
    )
    .expect("add after import");
    assert!(id > highest);
}
