//! Report module: the dated digest file
//!
//! Every run writes `<output>/hashes-output-YYMMDD.txt`. A second run on the
//! same day truncates and rewrites that file.

mod naming;
mod writer;

pub use naming::{date_stamp, output_file_name, output_path, today, OUTPUT_PREFIX};
pub use writer::{console_line, file_line, write_report, Report, ReportWriter};

#[cfg(test)]
mod tests;
