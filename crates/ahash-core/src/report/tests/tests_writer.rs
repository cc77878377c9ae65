//! Tests for ReportWriter and line formatting

#![allow(clippy::unwrap_used)]

use std::io::{self, Write};

use crate::error::Error;
use crate::hasher::HashRecord;
use crate::report::{console_line, file_line, ReportWriter};

const DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

/// Writer that fails every call
struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn test_file_line_with_name() {
    let record = HashRecord::new("a.txt", DIGEST);
    assert_eq!(file_line(&record, false), format!("a.txt: {DIGEST}"));
}

#[test]
fn test_file_line_clean_is_digest_only() {
    let record = HashRecord::new("a.txt", DIGEST);
    assert_eq!(file_line(&record, true), DIGEST);
}

#[test]
fn test_console_line_always_has_name() {
    let record = HashRecord::new("a.txt", DIGEST);
    assert_eq!(console_line(&record), format!("a.txt: {DIGEST}"));
}

#[test]
fn test_writer_writes_one_line_per_record() {
    let mut writer = ReportWriter::new(Vec::new(), "mem", false);
    writer.write_record(&HashRecord::new("a.txt", "aa")).unwrap();
    writer.write_record(&HashRecord::new("b.txt", "bb")).unwrap();
    assert_eq!(writer.written(), 2);

    let report = writer.finish().unwrap();
    assert_eq!(report.records, 2);
    assert_eq!(report.path.to_str(), Some("mem"));
}

#[test]
fn test_writer_clean_output() {
    let mut buf = Vec::new();
    {
        let mut writer = ReportWriter::new(&mut buf, "mem", true);
        writer.write_record(&HashRecord::new("a.txt", "aa")).unwrap();
        writer.write_record(&HashRecord::new("b.txt", "bb")).unwrap();
        writer.finish().unwrap();
    }

    assert_eq!(String::from_utf8(buf).unwrap(), "aa\nbb\n");
}

#[test]
fn test_writer_named_output() {
    let mut buf = Vec::new();
    {
        let mut writer = ReportWriter::new(&mut buf, "mem", false);
        writer.write_record(&HashRecord::new("a.txt", "aa")).unwrap();
        writer.finish().unwrap();
    }

    assert_eq!(String::from_utf8(buf).unwrap(), "a.txt: aa\n");
}

#[test]
fn test_writer_propagates_write_errors() {
    let mut writer = ReportWriter::new(BrokenWriter, "broken.txt", false);

    let err = writer
        .write_record(&HashRecord::new("a.txt", "aa"))
        .unwrap_err();

    assert!(matches!(err, Error::WriteOutput { .. }));
    assert_eq!(writer.written(), 0);
}
