//! Run banner

use ahash_core::RunConfig;
use crossterm::style::{StyledContent, Stylize};

/// Lines describing the resolved configuration
pub fn banner_lines(config: &RunConfig) -> Vec<String> {
    vec![
        format!(
            "{}",
            "Welcome to ahash - hash every file in a directory".cyan().bold()
        ),
        format!("INPUT: {}", config.input_dir.display().to_string().yellow()),
        format!("OUTPUT: {}", config.output_dir.display().to_string().yellow()),
        format!("Clean Output Logs: {}", flag(config.clean)),
        format!("Using Verbose Console Logs: {}", flag(config.verbose)),
        format!("Filtering Extensions: {}", config.extension.as_str().yellow()),
        format!("On Unreadable Files: {}", config.failure_policy),
    ]
}

pub fn print_banner(config: &RunConfig) {
    for line in banner_lines(config) {
        println!("{line}");
    }
}

fn flag(value: bool) -> StyledContent<String> {
    let text = value.to_string();
    if value {
        text.green()
    } else {
        text.red()
    }
}
