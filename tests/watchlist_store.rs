// tests/watchlist_store.rs

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::tempdir;

use pagewatch::errors::PagewatchError;
use pagewatch::fs::mock::MockFileSystem;
use pagewatch::fs::RealFileSystem;
use pagewatch::store::{AddOutcome, RemoveOutcome, WatchlistStore};
use pagewatch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn mock_store() -> (MockFileSystem, WatchlistStore) {
    let fs = MockFileSystem::new();
    let store = WatchlistStore::new("watchlist.txt", Arc::new(fs.clone()));
    (fs, store)
}

#[test]
fn missing_file_lists_empty() -> TestResult {
    init_tracing();
    let (_fs, store) = mock_store();
    assert!(store.list()?.is_empty());
    Ok(())
}

#[test]
fn add_is_idempotent_and_preserves_order() -> TestResult {
    init_tracing();
    let (fs, store) = mock_store();

    assert_eq!(store.add("https://a.example")?, AddOutcome::Added);
    assert_eq!(store.add("https://b.example")?, AddOutcome::Added);
    assert_eq!(store.add("https://a.example")?, AddOutcome::AlreadyPresent);

    assert_eq!(
        store.list()?,
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
    assert_eq!(
        fs.contents("watchlist.txt").as_deref(),
        Some("https://a.example\nhttps://b.example\n")
    );
    Ok(())
}

#[test]
fn add_trims_surrounding_whitespace() -> TestResult {
    let (_fs, store) = mock_store();

    store.add("  https://a.example \n")?;
    assert_eq!(store.add("https://a.example")?, AddOutcome::AlreadyPresent);
    assert_eq!(store.list()?, vec!["https://a.example".to_string()]);
    Ok(())
}

#[test]
fn add_rejects_identifiers_that_would_break_the_file() {
    let (fs, store) = mock_store();

    for bad in ["", "   ", "https://a.example/x y", "https://a\nhttps://b"] {
        match store.add(bad) {
            Err(PagewatchError::ConfigError(_)) => {}
            other => panic!("expected ConfigError for {bad:?}, got {other:?}"),
        }
    }
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn remove_absent_is_a_noop() -> TestResult {
    let (fs, store) = mock_store();
    store.add("https://a.example")?;
    let writes = fs.write_count();

    assert_eq!(store.remove("https://missing.example")?, RemoveOutcome::NotPresent);
    assert_eq!(fs.write_count(), writes);
    assert_eq!(store.list()?, vec!["https://a.example".to_string()]);
    Ok(())
}

#[test]
fn remove_present_rewrites_file() -> TestResult {
    let (fs, store) = mock_store();
    store.add("https://a.example")?;
    store.add("https://b.example")?;
    store.add("https://c.example")?;

    assert_eq!(store.remove("https://b.example")?, RemoveOutcome::Removed);
    assert_eq!(
        fs.contents("watchlist.txt").as_deref(),
        Some("https://a.example\nhttps://c.example\n")
    );
    Ok(())
}

#[test]
fn list_skips_blank_lines_and_keeps_duplicates() -> TestResult {
    let (fs, store) = mock_store();
    fs.add_file(
        "watchlist.txt",
        "https://a.example\n\n  https://b.example  \r\nhttps://a.example\n",
    );

    assert_eq!(
        store.list()?,
        vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
            "https://a.example".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn failed_write_keeps_previous_watchlist() -> TestResult {
    let (fs, store) = mock_store();
    store.add("https://a.example")?;

    fs.set_fail_writes(true);
    let err = store.add("https://b.example").unwrap_err();
    assert!(err.is_storage(), "unexpected error: {err:?}");

    assert_eq!(store.list()?, vec!["https://a.example".to_string()]);
    Ok(())
}

#[test]
fn real_filesystem_round_trip_leaves_no_temp_files() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let path: PathBuf = dir.path().join("lists").join("watchlist.txt");
    let store = WatchlistStore::new(path.clone(), Arc::new(RealFileSystem));

    assert!(store.list()?.is_empty());
    store.add("https://a.example")?;
    store.add("https://b.example")?;
    store.remove("https://a.example")?;

    assert_eq!(fs::read_to_string(&path)?, "https://b.example\n");

    let entries: Vec<_> = fs::read_dir(dir.path().join("lists"))?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("watchlist.txt")]);
    Ok(())
}

#[test]
fn second_store_instance_sees_mutations() -> TestResult {
    let fs = MockFileSystem::new();
    let writer = WatchlistStore::new("watchlist.txt", Arc::new(fs.clone()));
    let reader = WatchlistStore::new("watchlist.txt", Arc::new(fs.clone()));

    writer.add("https://a.example")?;
    assert_eq!(reader.list()?, vec!["https://a.example".to_string()]);

    writer.remove("https://a.example")?;
    assert!(reader.list()?.is_empty());
    Ok(())
}
