//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

use patterndex::catalog::{CatalogRecord, DataSet, Rating};
use tempfile::TempDir;

/// Path to the patterndex binary
pub fn patterndex_bin() -> &'static str {
    env!("CARGO_BIN_EXE_patterndex")
}

/// Creates a Command whose config and state files live in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &PathBuf) -> Command {
    let mut cmd = Command::new(patterndex_bin());
    cmd.env("PATTERNDEX_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Fresh, empty config directory.
pub fn temp_config_dir() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    (temp_dir.path().to_path_buf(), temp_dir)
}

/// Record with only the required fields.
pub fn record(id: &str, name: &str, category: &str) -> CatalogRecord {
    CatalogRecord::new(
        id,
        name,
        category,
        format!("{name} in one line"),
        format!("{name} explained at length."),
    )
}

/// Small classic-style data set: two categories, interleaved, with ratings.
pub fn sample_data_set() -> DataSet {
    let mut singleton = record("singleton", "Singleton", "Creational");
    singleton.rating = Rating::new(4);
    singleton.code_example = Some("class Config {\n  static instance = new Config();\n}".to_string());

    let mut adapter = record("adapter", "Adapter", "Structural");
    adapter.rating = Rating::new(5);

    let mut factory = record("factory-method", "Factory Method", "Creational");
    factory.rating = Rating::new(3);

    let observer = record("observer", "Observer", "Behavioral");

    Arc::from(vec![singleton, adapter, factory, observer])
}

/// Data set where two records share an id.
pub fn duplicate_id_data_set() -> DataSet {
    Arc::from(vec![
        record("facade", "Facade (first)", "Structural"),
        record("proxy", "Proxy", "Structural"),
        record("facade", "Facade (second)", "Structural"),
    ])
}
