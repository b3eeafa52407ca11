// config.rs
use crate::error::SiftError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// The action applied to each matched file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Count matches and print the number
    Count,
    /// Copy matches into the output directory
    Copy,
    /// Move matches into the output directory
    Move,
    /// Print the name of each match
    Print,
    /// Delete each match
    Remove,
}

impl ActionKind {
    /// Reports whether this action writes into an output directory
    pub fn needs_output(self) -> bool {
        matches!(self, ActionKind::Copy | ActionKind::Move)
    }
}

/// How multiple content terms are combined
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CombineMode {
    /// Every term must occur in the file
    #[default]
    All,
    /// Any single term suffices
    Any,
}

/// Validated configuration for one run
///
/// A run consumes this record as-is; no field changes once iteration
/// has started.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Action applied to each match
    pub action: ActionKind,

    /// Directory whose entries are enumerated
    pub input_dir: PathBuf,

    /// Destination directory, required for copy and move
    pub output_dir: Option<PathBuf>,

    /// Whether to enumerate the full subtree instead of immediate children
    pub recursive: bool,

    /// How content terms are combined
    pub combine: CombineMode,

    /// Whether warning lines are suppressed
    pub silent: bool,

    /// Content terms the file body must contain
    pub terms: Vec<Vec<u8>>,

    /// Wildcard filter for candidate names
    pub name_filter: String,
}

impl RunConfig {
    /// Creates a builder for the given action and input path
    ///
    /// The raw input path may carry a wildcard in its final component,
    /// e.g. `./src/*.rs`; in that case the component becomes the name
    /// filter and its parent becomes the input directory.
    pub fn builder(action: ActionKind, input: &str) -> RunConfigBuilder {
        let (input_dir, name_filter) = split_name_filter(input);
        RunConfigBuilder(RunConfig {
            action,
            input_dir,
            output_dir: None,
            recursive: false,
            combine: CombineMode::All,
            silent: false,
            terms: Vec::new(),
            name_filter,
        })
    }

    /// Checks the directory requirements of this configuration
    ///
    /// The input directory must exist and be a directory. Copy and move
    /// additionally require an output directory that exists, is a
    /// directory and differs from the input directory.
    ///
    /// # Errors
    ///
    /// Returns a configuration variant of `SiftError` describing the
    /// first violated rule.
    pub fn validate(&self) -> Result<(), SiftError> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(SiftError::MissingInput);
        }
        validate_directory(&self.input_dir, "input")?;
        if self.action.needs_output() {
            let output_dir = self.output_dir.as_ref().ok_or(SiftError::MissingOutput)?;
            validate_directory(output_dir, "output")?;
            if same_directory(&self.input_dir, output_dir) {
                return Err(SiftError::SameDirectories);
            }
        }
        Ok(())
    }
}

/// Builder for RunConfig for fluent configuration
pub struct RunConfigBuilder(RunConfig);

impl RunConfigBuilder {
    /// Sets the destination directory for copy and move
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.0.output_dir = Some(dir);
        self
    }

    /// Sets recursive subtree enumeration
    pub fn recursive(mut self, v: bool) -> Self {
        self.0.recursive = v;
        self
    }

    /// Sets the content term combination mode
    pub fn combine(mut self, mode: CombineMode) -> Self {
        self.0.combine = mode;
        self
    }

    /// Sets whether warning lines are suppressed
    pub fn silent(mut self, v: bool) -> Self {
        self.0.silent = v;
        self
    }

    /// Sets the content terms; empty strings are discarded
    pub fn terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.0.terms = terms
            .into_iter()
            .filter(|term| !term.as_ref().is_empty())
            .map(|term| term.as_ref().as_bytes().to_vec())
            .collect();
        self
    }

    /// Replaces the name filter extracted from the input path
    pub fn name_filter(mut self, filter: &str) -> Self {
        self.0.name_filter = filter.to_string();
        self
    }

    /// Builds the final RunConfig instance
    pub fn build(self) -> RunConfig {
        self.0
    }
}

/// Splits a raw input path into directory and name filter
///
/// If the final path component contains a `*` wildcard it is taken as
/// the name filter and the remaining path as the input directory.
/// Otherwise the whole path is the directory and the filter defaults
/// to `*`, which matches every name.
pub fn split_name_filter(input: &str) -> (PathBuf, String) {
    let path = Path::new(input);
    let last = path.components().next_back();
    if let Some(Component::Normal(name)) = last {
        if let Some(name) = name.to_str() {
            if name.contains('*') {
                let dir = path.parent().unwrap_or_else(|| Path::new("."));
                let dir = if dir.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    dir.to_path_buf()
                };
                return (dir, name.to_string());
            }
        }
    }
    (path.to_path_buf(), String::from("*"))
}

/// Checks that a path exists and is a directory
fn validate_directory(path: &Path, kind: &'static str) -> Result<(), SiftError> {
    match fs::metadata(path) {
        Ok(info) if info.is_dir() => Ok(()),
        Ok(_) => Err(SiftError::NotADirectory(kind)),
        Err(_) => Err(SiftError::DirectoryMissing(kind)),
    }
}

/// Compares two directories by their canonical form
///
/// Falls back to a literal comparison if either path cannot be
/// canonicalized.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}
