use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("FINANCE_TRACKER_FILE");
    cmd
}

#[test]
fn test_first_run_balance_is_zero() {
    let temp_dir = TempDir::new().unwrap();

    finance(&temp_dir)
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No existing transactions file found. Starting fresh.",
        ))
        .stdout(predicate::str::contains("Net Balance:   $0.00"))
        .stdout(predicate::str::contains(
            "Exiting Personal Finance Manager. Goodbye!",
        ));

    assert!(temp_dir.path().join("transactions.json").exists());
}

#[test]
fn test_transactions_persist_between_runs() {
    let temp_dir = TempDir::new().unwrap();

    finance(&temp_dir)
        .write_stdin("1\n1000\nSalary\nMarch\n2\n200.50\nFood\nGroceries\n5\n")
        .assert()
        .success();

    let saved = std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(records[0]["type"], "income");
    assert_eq!(records[1]["type"], "expense");
    assert_eq!(records[1]["amount"], 200.5);
    assert_eq!(records[1]["category"], "Food");

    finance(&temp_dir)
        .write_stdin("3\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Type: Income, Amount: $1000.00, Category: Salary, Description: March",
        ))
        .stdout(predicate::str::contains(
            "2. Type: Expense, Amount: $200.50, Category: Food, Description: Groceries",
        ))
        .stdout(predicate::str::contains("Net Balance:   $799.50"));
}

#[test]
fn test_corrupted_file_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("transactions.json"), "not json").unwrap();

    finance(&temp_dir)
        .write_stdin("3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("It might be corrupted. Starting fresh."))
        .stdout(predicate::str::contains("No transactions recorded yet."));
}

#[test]
fn test_file_flag_selects_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("books").join("2026.json");

    finance(&temp_dir)
        .arg("--file")
        .arg(&data_file)
        .write_stdin("2\n12\nBus\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    assert!(data_file.exists());
    assert!(!temp_dir.path().join("transactions.json").exists());
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("finance-settings.json"), "{").unwrap();

    finance(&temp_dir)
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default settings."))
        .stdout(predicate::str::contains("Total Income:  $0.00"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    finance(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}
