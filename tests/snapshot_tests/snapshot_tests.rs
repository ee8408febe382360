//! Snapshot Tests
//!
//! Tests verify:
//! - Encode / decode round trips, including escaped characters
//! - Malformed input handling
//! - Save / load through the Store
//! - Failed loads leave the Store untouched

use std::collections::HashMap;
use std::fs;

use bytes::Bytes;
use tempfile::TempDir;
use tricache::snapshot::{decode, encode};
use tricache::{CacheError, Store};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_entries() -> HashMap<String, Bytes> {
    let mut entries = HashMap::new();
    entries.insert("plain".to_string(), Bytes::from("value"));
    entries.insert("quote".to_string(), Bytes::from("say \"hi\""));
    entries.insert("slash".to_string(), Bytes::from("C:\\temp\\x"));
    entries.insert("lines".to_string(), Bytes::from("one\ntwo\tthree"));
    entries.insert("colon".to_string(), Bytes::from("x:1:5"));
    entries.insert("unicode".to_string(), Bytes::from("héllo ✓"));
    entries.insert("".to_string(), Bytes::from(""));
    entries
}

fn store_with(entries: &[(&str, &str)]) -> Store {
    let store = Store::new();
    for (key, value) in entries {
        store.add(*key, value.to_string()).unwrap();
    }
    store
}

// =============================================================================
// Codec Tests
// =============================================================================

#[test]
fn test_round_trip() {
    let entries = sample_entries();

    let decoded = decode(&encode(&entries).unwrap()).unwrap();

    assert_eq!(decoded, entries);
}

#[test]
fn test_round_trip_empty() {
    let entries = HashMap::new();

    let encoded = encode(&entries).unwrap();
    assert_eq!(encoded, b"{}\n");
    assert!(decode(&encoded).unwrap().is_empty());
}

#[test]
fn test_encoding_is_deterministic() {
    let entries = sample_entries();
    assert_eq!(encode(&entries).unwrap(), encode(&entries.clone()).unwrap());
}

#[test]
fn test_encoding_escapes_special_characters() {
    let mut entries = HashMap::new();
    entries.insert("k".to_string(), Bytes::from("a\"b\\c"));

    let encoded = String::from_utf8(encode(&entries).unwrap()).unwrap();

    assert_eq!(encoded, "{\"k\":\"a\\\"b\\\\c\"}\n");
}

#[test]
fn test_decode_malformed() {
    let inputs: [&[u8]; 5] = [
        b"{",
        b"not json",
        b"[\"a\", \"b\"]",
        b"{\"k\": 5}",
        b"{\"k\": \"v\",}",
    ];

    for input in inputs {
        let result = decode(input);
        assert!(
            matches!(result, Err(CacheError::Decode(_))),
            "expected decode error for {:?}",
            String::from_utf8_lossy(input)
        );
    }
}

// =============================================================================
// Save / Load Tests
// =============================================================================

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cache.json");

    let source = store_with(&[("a", "1"), ("b", "two"), ("c", "x\"y")]);
    source.save_to(&path).unwrap();

    let target = store_with(&[("stale", "gone")]);
    let loaded = target.load_from(&path).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(target.size(), 3);
    assert_eq!(target.get("a"), Some(Bytes::from("1")));
    assert_eq!(target.get("b"), Some(Bytes::from("two")));
    assert_eq!(target.get("c"), Some(Bytes::from("x\"y")));
    assert_eq!(target.get("stale"), None);
}

#[test]
fn test_save_does_not_modify_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cache.json");

    let store = store_with(&[("a", "1"), ("b", "2")]);
    store.save_to(&path).unwrap();

    assert_eq!(store.size(), 2);
    assert_eq!(store.get("a"), Some(Bytes::from("1")));
}

#[test]
fn test_save_writes_readable_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cache.json");

    store_with(&[("b", "2"), ("a", "1")]).save_to(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":\"1\",\"b\":\"2\"}\n");
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cache.json");

    store_with(&[("old", "1")]).save_to(&path).unwrap();
    store_with(&[("new", "2")]).save_to(&path).unwrap();

    let target = Store::new();
    target.load_from(&path).unwrap();
    assert_eq!(target.get("old"), None);
    assert_eq!(target.get("new"), Some(Bytes::from("2")));

    let names: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("cache.json");

    let store = store_with(&[("a", "1")]);
    let result = store.save_to(&path);

    assert!(matches!(result, Err(CacheError::Io(_))));
    assert_eq!(store.get("a"), Some(Bytes::from("1")));
}

#[test]
fn test_load_missing_file_keeps_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nofile.json");

    let store = store_with(&[("keep", "me")]);
    let result = store.load_from(&path);

    assert!(matches!(result, Err(CacheError::Io(_))));
    assert_eq!(store.size(), 1);
    assert_eq!(store.get("keep"), Some(Bytes::from("me")));
}

#[test]
fn test_load_malformed_file_keeps_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, b"{\"a\": \"1\"").unwrap();

    let store = store_with(&[("keep", "me")]);
    let result = store.load_from(&path);

    assert!(matches!(result, Err(CacheError::Decode(_))));
    assert_eq!(store.size(), 1);
    assert_eq!(store.get("keep"), Some(Bytes::from("me")));
}

#[test]
fn test_load_empty_file_clears_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, b"").unwrap();

    let store = store_with(&[("a", "1")]);
    let loaded = store.load_from(&path).unwrap();

    assert_eq!(loaded, 0);
    assert!(store.is_empty());
}
