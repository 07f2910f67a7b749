//! End-to-end tests for the headless `patterndex` subcommands.

use std::process::Output;

use serde_json::Value;

mod fixtures;
use fixtures::{isolated_command, temp_config_dir};

fn run(args: &[&str]) -> Output {
    let (config_dir, _temp_dir) = temp_config_dir();
    isolated_command(args, &config_dir)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

// ============================================================================
// sections / list / categories
// ============================================================================

#[test]
fn test_sections_json() {
    let output = run(&["sections", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["count"], 8);
    let sections = result["sections"].as_array().unwrap();
    assert_eq!(sections[0]["key"], "patterns");
    assert_eq!(sections[1]["segment"], "classic");
    assert_eq!(sections[2]["records"], 5);
    assert_eq!(sections[7]["key"], "architecture");
    assert_eq!(sections[7]["records"], 0);
}

#[test]
fn test_list_accepts_segment_and_key() {
    for name in ["classic", "classic-patterns"] {
        let output = run(&["list", name, "--json"]);
        assert_eq!(output.status.code(), Some(0), "list {name}");
        let result = stdout_json(&output);
        assert_eq!(result["section"], "classic-patterns");
        assert_eq!(result["category"], Value::Null);
        assert_eq!(result["count"], result["items"].as_array().unwrap().len());
    }
}

#[test]
fn test_list_with_category_filter() {
    let output = run(&["list", "classic", "--category", "Creational", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["category"], "Creational");
    let items = result["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|item| item["category"] == "Creational"));
    assert!(items.iter().all(|item| item["rating"].is_u64()));
}

#[test]
fn test_list_all_category_means_unfiltered() {
    let all = stdout_json(&run(&["list", "solid", "--category", "all", "--json"]));
    assert_eq!(all["category"], Value::Null);
    assert_eq!(all["count"], 5);
}

#[test]
fn test_list_unknown_category_is_empty() {
    let output = run(&["list", "solid", "-c", "Nope", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["count"], 0);
}

#[test]
fn test_list_unknown_section_is_validation_error() {
    let output = run(&["list", "does-not-exist"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist"), "stderr: {stderr}");
}

#[test]
fn test_categories_of_solid() {
    let output = run(&["categories", "solid", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["count"], 5);
    assert_eq!(result["categories"][0], "Single Responsibility");
}

#[test]
fn test_list_human_output() {
    let output = run(&["list", "solid"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("S.O.L.I.D. Principles"));
    assert!(stdout.contains("[S]"));
}

// ============================================================================
// show / open
// ============================================================================

#[test]
fn test_show_record_json() {
    let output = run(&["show", "classic", "singleton", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["id"], "singleton");
    assert_eq!(result["name"], "Singleton");
    assert_eq!(result["back"], "/classic");
    assert!(result["codeExample"].is_string());
}

#[test]
fn test_show_missing_record_is_not_found() {
    let output = run(&["show", "solid", "missing"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not found"), "stderr: {stderr}");
}

#[test]
fn test_open_resolve_only() {
    let cases = [
        ("/", "/patterns", true),
        ("/classic/singleton", "/classic/singleton", false),
        ("/nope/at/all", "/patterns", true),
        ("/architecture", "/architecture", false),
    ];
    for (requested, path, redirected) in cases {
        let output = run(&["open", requested, "--resolve-only", "--json"]);
        assert_eq!(output.status.code(), Some(0), "open {requested}");
        let result = stdout_json(&output);
        assert_eq!(result["path"], path, "open {requested}");
        assert_eq!(result["redirected"], redirected, "open {requested}");
    }
}

#[test]
fn test_open_detail_page() {
    let output = run(&["open", "/solid/open-closed", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["letter"], "O");
    assert_eq!(result["category"], "Open/Closed");
}

#[test]
fn test_open_missing_detail_is_not_found() {
    let output = run(&["open", "/grasp/missing"]);
    assert_eq!(output.status.code(), Some(3));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_embedded_content() {
    let output = run(&["validate", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result = stdout_json(&output);
    assert_eq!(result["valid"], true);
    assert_eq!(result["sections"], 7);
    assert!(result["issues"].as_array().unwrap().is_empty());
}

// ============================================================================
// consent / config
// ============================================================================

#[test]
fn test_consent_round_trip() {
    let (config_dir, _temp_dir) = temp_config_dir();

    let show = |dir| {
        let output = isolated_command(&["consent", "show", "--json"], dir)
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
        stdout_json(&output)
    };

    let initial = show(&config_dir);
    assert_eq!(initial["state"], "pending");
    assert_eq!(initial["analytics_enabled"], false);

    let output = isolated_command(&["consent", "accept"], &config_dir)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(show(&config_dir)["state"], "accepted");
    assert_eq!(show(&config_dir)["analytics_enabled"], true);

    isolated_command(&["consent", "reject"], &config_dir)
        .output()
        .unwrap();
    assert_eq!(show(&config_dir)["state"], "rejected");

    let stored = std::fs::read_to_string(config_dir.join("state.toml")).unwrap();
    assert!(stored.contains("cookie-consent"));
    assert!(stored.contains("rejected"));
}

#[test]
fn test_config_set_and_show() {
    let (config_dir, _temp_dir) = temp_config_dir();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--default-section",
            "classic",
            "--theme",
            "light",
            "--port",
            "8080",
        ],
        &config_dir,
    )
    .output()
    .unwrap();
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = isolated_command(&["config", "show", "--json"], &config_dir)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["catalog"]["default_section"], "classic-patterns");
    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["web"]["port"], 8080);
}

#[test]
fn test_config_rejects_unknown_section() {
    let (config_dir, _temp_dir) = temp_config_dir();
    let output = isolated_command(
        &["config", "set", "--default-section", "architecture"],
        &config_dir,
    )
    .output()
    .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!config_dir.join("config.toml").exists());
}
