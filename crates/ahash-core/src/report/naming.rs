//! Output file naming

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

pub const OUTPUT_PREFIX: &str = "hashes-output-";

/// Today's date in local time
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYMMDD` with a two digit year
#[must_use]
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

#[must_use]
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{OUTPUT_PREFIX}{}.txt", date_stamp(date))
}

#[must_use]
pub fn output_path(output_dir: &Path, date: NaiveDate) -> PathBuf {
    output_dir.join(output_file_name(date))
}
