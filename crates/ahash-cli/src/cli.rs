//! Command-line argument definitions

use std::path::{Path, PathBuf};

use ahash_core::{FailurePolicy, RunConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ahash")]
#[command(author, version, about = "Hash files in a directory", long_about = None)]
pub struct Cli {
    /// Input directory (default: current directory)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extension to hash, e.g. jar or .jar (default: all files)
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Clean output (no file names in the report file)
    #[arg(short, long)]
    pub clean: bool,

    /// Log each hash to the console
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip files that cannot be read instead of aborting the run
    #[arg(short, long)]
    pub keep_going: bool,
}

impl Cli {
    /// Resolve defaults and build the run configuration
    ///
    /// # Errors
    /// Returns an error if a directory was omitted and the current
    /// directory cannot be determined.
    pub fn into_config(self) -> ahash_core::Result<RunConfig> {
        let config = RunConfig::resolve(self.input.clone(), self.output.clone())?;
        Ok(self.apply(config))
    }

    /// Same as [`Cli::into_config`], falling back to `dir` for omitted
    /// directories
    #[must_use]
    pub fn into_config_with(self, dir: &Path) -> RunConfig {
        let config = RunConfig::resolve_with(self.input.clone(), self.output.clone(), dir);
        self.apply(config)
    }

    fn apply(self, config: RunConfig) -> RunConfig {
        let policy = if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        };

        config
            .with_extension(self.ext.unwrap_or_default())
            .with_clean(self.clean)
            .with_verbose(self.verbose)
            .with_failure_policy(policy)
    }
}
