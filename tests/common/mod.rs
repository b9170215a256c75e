#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use expense_core::{
    storage::{DurableStore, JsonFileStore},
    StateManager,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn file_store(base: &PathBuf) -> DurableStore {
    let medium = JsonFileStore::new(Some(base.clone())).expect("create json file store");
    DurableStore::new(Box::new(medium))
}

/// Opens a state manager over a fresh on-disk store, returning its directory.
pub fn setup_state() -> (StateManager, PathBuf) {
    let base = temp_base();
    let state = StateManager::open(file_store(&base)).expect("open state manager");
    (state, base)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
