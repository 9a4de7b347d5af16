use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::model::config::AppConfig;
use crate::model::ledger::Snapshot;

pub const STORE_FILE: &str = "tally.json";
pub const LOG_FILE: &str = "tally.log";

/// Read the raw snapshot from tally.json. None when the file is missing or
/// malformed; callers fall back to a blank snapshot.
pub fn read_snapshot(data_dir: &Path) -> Option<Snapshot> {
    let path = data_dir.join(STORE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Load the snapshot for a session: blank fallback on missing/malformed data,
/// then reconciled against the live catalog so renamed or removed items
/// never surface downstream.
pub fn load_snapshot(data_dir: &Path, config: &AppConfig) -> Snapshot {
    let path = data_dir.join(STORE_FILE);
    match read_snapshot(data_dir) {
        Some(snapshot) => snapshot.reconcile(config),
        None => {
            if path.exists() {
                log_diagnostic(
                    data_dir,
                    &format!("malformed snapshot at {}, starting blank", path.display()),
                );
            }
            Snapshot::blank(config)
        }
    }
}

/// Write the snapshot to tally.json
pub fn write_snapshot(data_dir: &Path, snapshot: &Snapshot) -> Result<(), std::io::Error> {
    let path = data_dir.join(STORE_FILE);
    let content = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, content)
}

/// Append a timestamped diagnostic line to tally.log. Best effort, never
/// shown to the operator.
pub fn log_diagnostic(data_dir: &Path, message: &str) {
    let path = data_dir.join(LOG_FILE);
    let line = format!(
        "{} {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        message
    );
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(line.as_bytes()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("foodtruck", "Tomatoes", 3.0, "case");
        snapshot.append("cr", "Tomatoes", 2.0, "case");
        snapshot.undo("cr", "Tomatoes");

        write_snapshot(dir.path(), &snapshot).unwrap();
        let loaded = load_snapshot(dir.path(), &config);
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn missing_file_loads_blank_without_diagnostic() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default();
        let loaded = load_snapshot(dir.path(), &config);
        assert!(loaded.is_empty());
        assert!(!dir.path().join(LOG_FILE).exists());
    }

    #[test]
    fn malformed_file_loads_blank_and_logs() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default();
        fs::write(dir.path().join(STORE_FILE), "not json {{{").unwrap();

        let loaded = load_snapshot(dir.path(), &config);
        assert!(loaded.is_empty());

        let log = fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        assert!(log.contains("malformed snapshot"));
    }

    #[test]
    fn load_reconciles_against_catalog() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default();
        // storage written before "Plantain" joined the catalog, with one
        // item that has since been removed
        fs::write(
            dir.path().join(STORE_FILE),
            r#"{
  "foodtruck": {
    "Tomatoes": {"logs": [{"quantity": 2.0, "unit": "case"}], "undone": []},
    "Discontinued": {"logs": [{"quantity": 9.0, "unit": "case"}], "undone": []}
  }
}"#,
        )
        .unwrap();

        let loaded = load_snapshot(dir.path(), &config);
        assert_eq!(loaded.ledger("foodtruck", "Tomatoes").unwrap().logs.len(), 1);
        assert!(loaded.ledger("foodtruck", "Plantain").unwrap().is_empty());
        assert!(loaded.ledger("foodtruck", "Discontinued").is_none());
        // the other configured location exists even though storage lacked it
        assert!(loaded.ledger("cr", "Tomatoes").unwrap().is_empty());
    }

    #[test]
    fn ledger_entries_survive_serde_defaults() {
        // undone omitted entirely in storage still deserializes
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"foodtruck": {"Tomatoes": {"logs": [{"quantity": 1.0, "unit": "lbs"}]}}}"#,
        )
        .unwrap();
        let ledger = snapshot.ledger("foodtruck", "Tomatoes").unwrap();
        assert_eq!(ledger.logs.len(), 1);
        assert!(ledger.undone.is_empty());
    }
}
