// lib.rs
#![forbid(unsafe_code)]

pub mod actions;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod runner;
pub mod walker;

pub use crate::config::{ActionKind, CombineMode, RunConfig, RunConfigBuilder};
pub use crate::error::SiftError;
pub use crate::pattern::FilterPattern;
pub use crate::runner::RunOutcome;

/// Main facade for the filesift library
///
/// This struct provides the high-level API for running a complete
/// selection-and-action pass over a directory tree.
pub struct FileSift;

impl FileSift {
    /// Runs one configured pass and returns its outcome
    ///
    /// The configuration is validated first; iteration only starts on
    /// a valid configuration. Warning lines and the terminal summary
    /// are printed during the run, matching the command-line output
    /// contract.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated-on-entry run configuration
    ///
    /// # Returns
    ///
    /// `Ok(RunOutcome)` once the run has summarized, or
    /// `Err(SiftError)` if the configuration is rejected before any
    /// iteration begins
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filesift::{ActionKind, FileSift, RunConfig};
    ///
    /// let config = RunConfig::builder(ActionKind::Count, "./*.txt")
    ///     .recursive(true)
    ///     .terms(["foo", "bar"])
    ///     .build();
    /// let outcome = FileSift::run(config).unwrap();
    /// println!("{} matches", outcome.count);
    /// ```
    pub fn run(config: RunConfig) -> Result<RunOutcome, SiftError> {
        config.validate()?;
        Ok(runner::run(&config))
    }
}
