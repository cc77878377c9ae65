//! Tests for single-file digests

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use crate::error::Error;
use crate::hasher::{compute_file_hash, content_hash};

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

#[rstest]
#[case(b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")]
#[case(b"hello", HELLO_SHA256)]
#[case(b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")]
fn test_content_hash_known_vectors(#[case] content: &[u8], #[case] expected: &str) {
    assert_eq!(content_hash(content), expected);
}

#[test]
fn test_content_hash_is_lowercase_hex() {
    let hash = content_hash(b"anything at all");

    assert_eq!(hash.len(), 64);
    assert!(hash
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_content_hash_changes_with_content() {
    assert_ne!(content_hash(b"v1"), content_hash(b"v2"));
}

#[test]
fn test_compute_file_hash_matches_file_bytes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("a.txt");
    fs::write(&path, "hello").expect("Failed to write file");

    assert_eq!(compute_file_hash(&path).unwrap(), HELLO_SHA256);
}

#[test]
fn test_compute_file_hash_binary_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("blob.bin");
    let content: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
    fs::write(&path, &content).expect("Failed to write file");

    assert_eq!(compute_file_hash(&path).unwrap(), content_hash(&content));
}

#[test]
fn test_compute_file_hash_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gone.txt");

    let err = compute_file_hash(&path).unwrap_err();

    assert!(matches!(err, Error::ReadFile { path: ref p, .. } if *p == path));
}
