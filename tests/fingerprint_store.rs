// tests/fingerprint_store.rs

use std::error::Error;
use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use pagewatch::detect::{resource_key, Fingerprint};
use pagewatch::fs::mock::MockFileSystem;
use pagewatch::fs::RealFileSystem;
use pagewatch::store::{FileFingerprintStore, FingerprintStore, MemoryFingerprintStore};
use pagewatch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn fingerprint_is_blake3_hex_of_content() {
    // blake3 hash of "hello world"
    assert_eq!(
        Fingerprint::of("hello world").as_str(),
        "d74981efa70a0c880b8d8c1985d075dbcbf679b99a5f9914e5aaf96b831a9e24"
    );
}

#[test]
fn from_hex_accepts_stored_form_only() {
    let fp = Fingerprint::of("page");
    assert_eq!(Fingerprint::from_hex(fp.as_str()), Some(fp.clone()));
    assert_eq!(Fingerprint::from_hex(&format!("  {}\n", fp)), Some(fp.clone()));
    assert_eq!(
        Fingerprint::from_hex(&fp.as_str().to_uppercase()),
        Some(fp)
    );
    assert_eq!(Fingerprint::from_hex("abc"), None);
    assert_eq!(Fingerprint::from_hex(&"z".repeat(64)), None);
}

#[test]
fn keys_differ_for_urls_that_collide_under_substitution() {
    // Both map to "a.example_b_c" when the scheme is stripped and '/' -> '_'.
    let a = resource_key("https://a.example/b_c");
    let b = resource_key("http://a.example/b/c");
    assert_ne!(a, b);
    assert_eq!(a, resource_key("https://a.example/b_c"));
}

#[test]
fn file_store_load_absent_then_saved_value() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    let mut store = FileFingerprintStore::new("state/fingerprints", Arc::new(fs.clone()));
    let url = "https://a.example";

    assert_eq!(store.load(url)?, None);

    let fp = Fingerprint::of("content a");
    store.save(url, &fp)?;
    assert_eq!(store.load(url)?, Some(fp.clone()));

    // One file, hex digest, no trailing structure.
    let path = store.slot_path(url);
    assert_eq!(fs.contents(&path), Some(fp.to_string()));

    let newer = Fingerprint::of("content b");
    store.save(url, &newer)?;
    assert_eq!(store.load(url)?, Some(newer));
    Ok(())
}

#[test]
fn file_store_treats_empty_or_garbage_slot_as_absent() -> TestResult {
    let fs = MockFileSystem::new();
    let store = FileFingerprintStore::new("fp", Arc::new(fs.clone()));

    fs.add_file(store.slot_path("https://empty.example"), "");
    fs.add_file(store.slot_path("https://garbage.example"), "not a digest");

    assert_eq!(store.load("https://empty.example")?, None);
    assert_eq!(store.load("https://garbage.example")?, None);
    Ok(())
}

#[test]
fn failed_save_keeps_previous_fingerprint() -> TestResult {
    let fs = MockFileSystem::new();
    let mut store = FileFingerprintStore::new("fp", Arc::new(fs.clone()));
    let url = "https://a.example";
    let old = Fingerprint::of("old");
    store.save(url, &old)?;

    fs.set_fail_writes(true);
    let err = store.save(url, &Fingerprint::of("new")).unwrap_err();
    assert!(err.is_storage());

    assert_eq!(store.load(url)?, Some(old));
    Ok(())
}

#[test]
fn forget_removes_only_that_slot() -> TestResult {
    let fs = MockFileSystem::new();
    let mut store = FileFingerprintStore::new("fp", Arc::new(fs.clone()));
    store.save("https://keep.example", &Fingerprint::of("k"))?;
    store.save("https://drop.example", &Fingerprint::of("d"))?;

    store.forget("https://drop.example")?;
    store.forget("https://never-saved.example")?;

    assert_eq!(store.load("https://keep.example")?, Some(Fingerprint::of("k")));
    assert_eq!(store.load("https://drop.example")?, None);
    Ok(())
}

#[test]
fn real_filesystem_slot_is_plain_hex() -> TestResult {
    let dir = tempdir()?;
    let mut store = FileFingerprintStore::new(dir.path().join("fingerprints"), Arc::new(RealFileSystem));
    let fp = Fingerprint::of("content");

    store.save("https://a.example", &fp)?;

    let on_disk = fs::read_to_string(store.slot_path("https://a.example"))?;
    assert_eq!(on_disk, fp.as_str());
    assert_eq!(store.load("https://a.example")?, Some(fp));

    store.forget("https://a.example")?;
    assert!(!store.slot_path("https://a.example").exists());
    Ok(())
}

#[test]
fn memory_store_behaves_like_file_store() -> TestResult {
    let mut store = MemoryFingerprintStore::new();
    assert_eq!(store.load("u")?, None);

    store.save("u", &Fingerprint::of("x"))?;
    store.save("v", &Fingerprint::of("y"))?;
    assert_eq!(store.load("u")?, Some(Fingerprint::of("x")));

    store.forget("u")?;
    assert_eq!(store.load("u")?, None);
    assert_eq!(store.load("v")?, Some(Fingerprint::of("y")));
    Ok(())
}
