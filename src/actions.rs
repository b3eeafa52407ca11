// actions.rs
use crate::config::{ActionKind, RunConfig};
use crate::error::SiftError;
use crate::walker::FileCandidate;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// The per-file behavior of a run
///
/// One variant per command; copy and move carry the transfer state
/// (output root and the cache of confirmed destination directories).
/// Dispatch happens once per matched candidate through `process_file`.
pub enum ActionProcessor {
    /// Counting happens in the controller; processing is a no-op
    Count,
    /// Print the matched file's name
    Print,
    /// Delete the matched file
    Remove,
    /// Copy the matched file into the output tree
    Copy(TransferState),
    /// Move the matched file into the output tree
    Move(TransferState),
}

impl ActionProcessor {
    /// Creates the processor for the configured action
    ///
    /// Copy and move require `output_dir` to be set; `validate` on the
    /// configuration guarantees that before a run starts.
    pub fn new(config: &RunConfig) -> Result<Self, SiftError> {
        match config.action {
            ActionKind::Count => Ok(ActionProcessor::Count),
            ActionKind::Print => Ok(ActionProcessor::Print),
            ActionKind::Remove => Ok(ActionProcessor::Remove),
            ActionKind::Copy => Ok(ActionProcessor::Copy(TransferState::new(config)?)),
            ActionKind::Move => Ok(ActionProcessor::Move(TransferState::new(config)?)),
        }
    }

    /// Applies the action to one matched candidate
    ///
    /// # Errors
    ///
    /// Per-file failures (destination exists, directory conflict, I/O)
    /// are returned to the controller, which reports them as warnings
    /// and continues with the next candidate.
    pub fn process_file(&mut self, candidate: &FileCandidate) -> Result<(), SiftError> {
        match self {
            ActionProcessor::Count => Ok(()),
            ActionProcessor::Print => {
                println!("{}", candidate.name);
                Ok(())
            }
            ActionProcessor::Remove => {
                fs::remove_file(&candidate.path)?;
                Ok(())
            }
            ActionProcessor::Copy(state) => {
                let destination = state.prepare_destination(candidate)?;
                let mut input = File::open(&candidate.path)?;
                let mut output = File::create(&destination)?;
                io::copy(&mut input, &mut output)?;
                Ok(())
            }
            ActionProcessor::Move(state) => {
                let destination = state.prepare_destination(candidate)?;
                fs::rename(&candidate.path, &destination)?;
                Ok(())
            }
        }
    }

    /// Emits the terminal summary line for the run
    ///
    /// The count command prints the bare number, the print command
    /// stays quiet unless the run failed, and the remaining commands
    /// report `finished: N file(s)`. A fatal failure replaces the
    /// summary with an `error:` line.
    pub fn summarize(&self, count: usize, failure: Option<&SiftError>) {
        if let Some(err) = failure {
            println!("error: {err}");
            return;
        }
        match self {
            ActionProcessor::Count => println!("{count}"),
            ActionProcessor::Print => {}
            _ => println!("finished: {count} file(s)"),
        }
    }
}

/// Destination state shared by copy and move
///
/// A destination subdirectory, once confirmed to exist, is remembered
/// for the remainder of the run so repeated candidates in the same
/// subdirectory incur no redundant filesystem calls.
pub struct TransferState {
    output_dir: PathBuf,
    confirmed_dirs: HashSet<PathBuf>,
}

impl TransferState {
    fn new(config: &RunConfig) -> Result<Self, SiftError> {
        let output_dir = config
            .output_dir
            .clone()
            .ok_or(SiftError::MissingOutput)?;
        Ok(Self {
            output_dir,
            confirmed_dirs: HashSet::new(),
        })
    }

    /// Ensures the destination directory exists and the target is free
    ///
    /// Replicates the candidate's subdirectory under the output root,
    /// then refuses to overwrite an existing destination file. The
    /// returned path is ready to be created or renamed onto.
    fn prepare_destination(&mut self, candidate: &FileCandidate) -> Result<PathBuf, SiftError> {
        let dir = self.output_dir.join(candidate.sub_dir.as_std_path());
        self.ensure_dir(&dir, candidate)?;
        let destination = dir.join(&candidate.name);
        if destination.exists() {
            return Err(SiftError::TargetExists(relative_name(candidate)));
        }
        Ok(destination)
    }

    /// Confirms a destination directory, creating it if absent
    ///
    /// Creation failure is non-fatal if the directory exists afterwards;
    /// an external process may have created it in between.
    fn ensure_dir(&mut self, dir: &Path, candidate: &FileCandidate) -> Result<(), SiftError> {
        if self.confirmed_dirs.contains(dir) {
            return Ok(());
        }
        match fs::metadata(dir) {
            Ok(info) if info.is_dir() => {}
            Ok(_) => {
                return Err(SiftError::DirectoryConflict(
                    candidate.sub_dir.as_str().to_string(),
                ))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if let Err(create_err) = fs::create_dir_all(dir) {
                    if !dir.is_dir() {
                        return Err(SiftError::Io(create_err));
                    }
                }
            }
            Err(err) => return Err(SiftError::Io(err)),
        }
        self.confirmed_dirs.insert(dir.to_path_buf());
        Ok(())
    }
}

/// Renders the candidate's path relative to the walk root
fn relative_name(candidate: &FileCandidate) -> String {
    candidate.sub_dir.join(&candidate.name).into_string()
}
