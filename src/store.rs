use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// Origin-scoped key-value persistence, the shape of browser local
/// storage. Writes land durably before `set` returns, so a value and the
/// DOM mutation it accompanies can never be observed out of sync across
/// runs.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory store. Nothing survives the process; tests use it to drive
/// components without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file store. A missing file reads as empty; the file is created on
/// first write. Keys other than the ones this tool owns are carried
/// through untouched.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let entries = match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parse {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", path.display()));
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn persist(&self) -> anyhow::Result<()> {
        let json =
            serde_json::to_string_pretty(&self.entries).context("serialize preference store")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl PrefStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let tmp = tempdir().unwrap();
        let store = JsonFileStore::open(&tmp.path().join("state.json")).unwrap();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn set_is_durable() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn foreign_keys_survive_a_write() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("state.json");
        std::fs::write(&path, r#"{"sidebar": "collapsed"}"#).unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "light").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("sidebar").as_deref(), Some("collapsed"));
        assert_eq!(reopened.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }
}
