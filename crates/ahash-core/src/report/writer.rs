//! Report writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::naming::output_path;
use crate::error::{Error, Result};
use crate::hasher::HashRecord;

/// A finished report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub records: usize,
}

/// Line written to the report file for one record
#[must_use]
pub fn file_line(record: &HashRecord, clean: bool) -> String {
    if clean {
        record.digest.clone()
    } else {
        console_line(record)
    }
}

/// Line echoed to the console; always carries the file name
#[must_use]
pub fn console_line(record: &HashRecord) -> String {
    format!("{}: {}", record.name, record.digest)
}

/// Writes records to a report, one line each
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
    path: PathBuf,
    clean: bool,
    written: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>, clean: bool) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| Error::CreateOutput {
            path: path.clone(),
            source,
        })?;
        debug!("Opened report {}", path.display());
        Ok(Self::new(BufWriter::new(file), path, clean))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wrap an existing writer; `path` is only used for reporting
    #[must_use]
    pub fn new(out: W, path: impl Into<PathBuf>, clean: bool) -> Self {
        Self {
            out,
            path: path.into(),
            clean,
            written: 0,
        }
    }

    /// Append one record
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn write_record(&mut self, record: &HashRecord) -> Result<()> {
        writeln!(self.out, "{}", file_line(record, self.clean)).map_err(|e| self.write_error(e))?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and close the report
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<Report> {
        self.out.flush().map_err(|e| self.write_error(e))?;
        Ok(Report {
            path: self.path,
            records: self.written,
        })
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::WriteOutput {
            path: self.path.clone(),
            source,
        }
    }
}

/// Write the dated report for `records` into `output_dir`
///
/// When `echo` is given every record is also written to it as
/// `name: digest`, whatever `clean` is set to.
///
/// # Errors
/// Returns an error if the report cannot be created or written, or if the
/// echo fails.
pub fn write_report(
    output_dir: &Path,
    date: NaiveDate,
    records: &[HashRecord],
    clean: bool,
    mut echo: Option<&mut dyn Write>,
) -> Result<Report> {
    let mut writer = ReportWriter::create(output_path(output_dir, date), clean)?;

    for record in records {
        writer.write_record(record)?;
        if let Some(console) = echo.as_deref_mut() {
            writeln!(console, "{}", console_line(record)).map_err(Error::Console)?;
        }
    }

    let report = writer.finish()?;
    info!(
        "Wrote {} records to {}",
        report.records,
        report.path.display()
    );
    Ok(report)
}
