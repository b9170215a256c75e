use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::utils::paths::{app_data_dir, ensure_dir, write_atomic};

use super::{KeyValueStore, Result};

const RECORD_EXTENSION: &str = "json";

/// Directory-backed medium: every key lives in its own `<key>.json` file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the store rooted at `root`, falling back to
    /// the application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn record_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(key), RECORD_EXTENSION))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.record_path(key), value)?;
        Ok(())
    }
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "record".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::paths::tmp_path;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.get("transactions").unwrap().is_none());
    }

    #[test]
    fn set_then_get_returns_latest_value() {
        let (store, _guard) = store_with_temp_dir();
        store.set("categories", "[]").unwrap();
        store.set("categories", "[1]").unwrap();
        assert_eq!(store.get("categories").unwrap().as_deref(), Some("[1]"));
        assert!(!tmp_path(&store.record_path("categories")).exists());
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        let (store, _guard) = store_with_temp_dir();
        let path = store.record_path("../Weird Key");
        assert_eq!(path.parent(), Some(store.base_dir()));
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("___weird_key.json")
        );
    }

    #[test]
    fn failed_write_preserves_previous_record() {
        let (store, _guard) = store_with_temp_dir();
        store.set("transactions", "[]").unwrap();
        let path = store.record_path("transactions");
        // A directory at the temp path makes File::create fail.
        fs::create_dir_all(tmp_path(&path)).unwrap();

        assert!(store.set("transactions", "[{}]").is_err());
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[]"));
    }
}
