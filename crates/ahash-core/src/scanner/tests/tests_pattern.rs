//! Tests for glob pattern construction

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use crate::error::Error;
use crate::scanner::file_pattern;
use crate::scanner::pattern::compile;

#[test]
fn test_file_pattern_for_all_extensions() {
    assert_eq!(file_pattern("*"), "*.*");
}

#[test]
fn test_file_pattern_for_extension() {
    assert_eq!(file_pattern("txt"), "*.txt");
    assert_eq!(file_pattern("tar.gz"), "*.tar.gz");
}

#[rstest]
#[case("*.*", "a.txt", true)]
#[case("*.*", ".hidden", true)]
#[case("*.*", "README", false)]
#[case("*.txt", "a.txt", true)]
#[case("*.txt", "a.TXT", false)]
#[case("*.txt", "a.txt.bak", false)]
#[case("*.gz", "a.tar.gz", true)]
#[case("*.{txt,md}", "a.txt", false)]
#[case("*.{txt,md}", "a.md", false)]
#[case("*.{txt,md}", "a.{txt,md}", true)]
#[case("*.{a", "x.{a", true)]
#[case("*.[{]x", "a.{x", true)]
#[case("*.\\{x", "a.{x", true)]
fn test_compiled_pattern_matches_names(
    #[case] pattern: &str,
    #[case] name: &str,
    #[case] expected: bool,
) {
    let matcher = compile(pattern).unwrap();
    assert_eq!(matcher.is_match(name), expected);
}

#[rstest]
#[case("*.[a")]
#[case("*.[b-")]
fn test_malformed_pattern_is_rejected(#[case] pattern: &str) {
    let err = compile(pattern).unwrap_err();
    assert!(matches!(err, Error::GlobPattern { pattern: ref p, .. } if p == pattern));
}
