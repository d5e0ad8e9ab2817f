//! E2E tests for the price and preset command functionality

use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let mut full_args = vec!["run", "--quiet", "--"];
    full_args.extend_from_slice(args);
    Command::new("cargo")
        .args(&full_args)
        .output()
        .expect("Failed to execute command")
}

fn temp_store(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("precifica-cli-{}-{}.json", name, std::process::id()))
}

/// The worked example: materials 38, labor 120, difficulty 10%, fees 14%,
/// margin 40%, psychological rounding on
const WORKED_EXAMPLE: &[&str] = &[
    "price",
    "--yarn",
    "25",
    "--accessories",
    "6",
    "--stuffing",
    "4",
    "--packaging",
    "3",
    "--hours",
    "6",
    "--rate",
    "20",
    "--difficulty",
    "10",
    "--overhead",
    "2.5",
    "--shipping",
    "0",
    "--platform-fee",
    "8",
    "--tax",
    "6",
    "--margin",
    "40",
    "--round",
    "true",
    "--no-session",
];

#[test]
fn price_worked_example_json() {
    let mut args = WORKED_EXAMPLE.to_vec();
    args.push("--json");
    let output = run(&args);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("205.9"), "minimum price missing: {stdout}");
    assert!(stdout.contains("287.9"), "recommended price missing: {stdout}");
    assert!(stdout.contains("330.9"), "premium price missing: {stdout}");
    assert!(stdout.contains(r#""margin_rating": "good""#), "{stdout}");
}

#[test]
fn price_worked_example_table() {
    let output = run(WORKED_EXAMPLE);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("PRICING"));
    assert!(stdout.contains("Minimum"));
    assert!(stdout.contains("Recommended"));
    assert!(stdout.contains("Premium"));
    assert!(stdout.contains("R$ 287,90"));
    assert!(stdout.contains("Pay now"));
    assert!(stdout.contains("Effective margin"));
}

#[test]
fn price_fees_at_one_hundred_percent_is_a_config_error() {
    let output = run(&[
        "price",
        "--platform-fee",
        "60",
        "--tax",
        "40",
        "--no-session",
    ]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pricing impossible"), "{stderr}");
}

#[test]
fn preset_save_list_delete_round_trip() {
    let store = temp_store("round-trip");
    let store_arg = store.to_str().unwrap();

    let output = run(&[
        "preset", "--store", store_arg, "save", "--name", "Bunny", "--size", "m",
    ]);
    assert!(output.status.success(), "Save failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved preset"));

    // "Saved preset <id> (Bunny)"
    let id = stdout
        .split_whitespace()
        .nth(2)
        .expect("missing preset id")
        .to_string();

    let output = run(&["preset", "--store", store_arg, "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bunny"));
    assert!(stdout.contains("M (15-20 cm)"));

    let output = run(&["preset", "--store", store_arg, "show", &id]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bunny"));

    let output = run(&["preset", "--store", store_arg, "delete", &id]);
    assert!(output.status.success());

    // Deleting again must report not-found, not a silent success
    let output = run(&["preset", "--store", store_arg, "delete", &id]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "{stderr}");

    let _ = std::fs::remove_file(&store);
}

#[test]
fn preset_save_requires_a_name() {
    let store = temp_store("no-name");
    let store_arg = store.to_str().unwrap();

    let output = run(&["preset", "--store", store_arg, "save"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("name must not be empty"), "{stderr}");

    let _ = std::fs::remove_file(&store);
}

#[test]
fn preset_update_changes_named_fields() {
    let store = temp_store("update");
    let store_arg = store.to_str().unwrap();

    let output = run(&[
        "preset", "--store", store_arg, "save", "--name", "Whale",
    ]);
    assert!(output.status.success(), "Save failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let id = stdout.split_whitespace().nth(2).unwrap().to_string();

    let output = run(&[
        "preset", "--store", store_arg, "update", &id, "--margin", "60",
    ]);
    assert!(output.status.success(), "Update failed: {:?}", output);

    let output = run(&["preset", "--store", store_arg, "show", &id, "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""margin_percent": 60"#), "{stdout}");
    assert!(stdout.contains(r#""name": "Whale""#), "{stdout}");

    let _ = std::fs::remove_file(&store);
}

#[test]
fn preset_save_can_copy_an_existing_preset() {
    let store = temp_store("copy");
    let store_arg = store.to_str().unwrap();

    let output = run(&[
        "preset", "--store", store_arg, "save", "--name", "Origin", "--margin", "44",
    ]);
    assert!(output.status.success(), "Save failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let id = stdout.split_whitespace().nth(2).unwrap().to_string();

    let output = run(&[
        "preset", "--store", store_arg, "save", "--preset", &id, "--name", "Copy",
    ]);
    assert!(output.status.success(), "Copy failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let copy_id = stdout.split_whitespace().nth(2).unwrap().to_string();
    assert_ne!(copy_id, id);

    let output = run(&["preset", "--store", store_arg, "show", &copy_id, "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""name": "Copy""#), "{stdout}");
    assert!(stdout.contains(r#""margin_percent": 44"#), "{stdout}");

    let _ = std::fs::remove_file(&store);
}

#[test]
fn price_last_restores_the_previous_session() {
    let session = std::env::temp_dir().join(format!(
        "precifica-cli-session-{}.json",
        std::process::id()
    ));
    let session_arg = session.to_str().unwrap();

    let output = run(&[
        "price",
        "--margin",
        "55",
        "--hours",
        "3",
        "--session-file",
        session_arg,
    ]);
    assert!(output.status.success(), "Price failed: {:?}", output);
    assert!(session.exists(), "session file was not written");

    let output = run(&[
        "price",
        "--last",
        "--session-file",
        session_arg,
        "--no-session",
        "--json",
    ]);
    assert!(output.status.success(), "Restore failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""margin_percent": 55"#), "{stdout}");
    assert!(stdout.contains(r#""labor_hours": 3"#), "{stdout}");

    let _ = std::fs::remove_file(&session);
}

#[test]
fn sizes_prints_the_preset_table() {
    let output = run(&["sizes"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("P (10-14 cm)"));
    assert!(stdout.contains("M (15-20 cm)"));
    assert!(stdout.contains("G (21-30 cm)"));
    // Hours per size and the G yarn cost, all distinct from the labels
    assert!(stdout.contains("4.5"), "{stdout}");
    assert!(stdout.contains("6.5"), "{stdout}");
    assert!(stdout.contains("35"), "{stdout}");
}

#[test]
fn schema_prints_the_input_format() {
    let output = run(&["schema", "input"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PricingInput"));
    assert!(stdout.contains("yarn_cost"));
    assert!(stdout.contains("psychological_rounding"));
}
