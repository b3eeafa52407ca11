// walker.rs
use crate::error::SiftError;
use camino::Utf8PathBuf;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A regular file yielded by the walker for potential selection
///
/// Candidates are transient; each one exists only for the duration of
/// a single filter-and-process step.
#[derive(Clone, Debug)]
pub struct FileCandidate {
    /// Full path of the file
    pub path: PathBuf,

    /// File name, valid UTF-8
    pub name: String,

    /// Parent directory relative to the walk root; empty for
    /// immediate children of the root
    pub sub_dir: Utf8PathBuf,
}

/// A failure raised while enumerating candidates
///
/// Failures at the walk root are fatal and abort the run; failures on
/// a single entry are reported as warnings and the entry is skipped.
#[derive(Debug)]
pub struct WalkFailure {
    /// The underlying error
    pub error: SiftError,

    /// Whether the walk root itself could not be read
    pub fatal: bool,
}

/// Lazy enumeration of candidate files under a root directory
///
/// In flat mode only the immediate entries of the root are visited and
/// directories among them are skipped entirely. In recursive mode the
/// full subtree is traversed; directories are descended into but never
/// yielded as candidates. The root entry itself is never yielded.
/// Entries are sorted by file name within each directory so repeated
/// runs over an unchanged tree enumerate in the same order.
pub struct Walker {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Walker {
    /// Creates a walker over `root`
    ///
    /// # Arguments
    ///
    /// * `root` - Directory whose entries are enumerated
    /// * `recursive` - Whether to traverse the full subtree
    pub fn new(root: &Path, recursive: bool) -> Self {
        let mut walk = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name();
        if !recursive {
            walk = walk.max_depth(1);
        }
        Self {
            root: root.to_path_buf(),
            inner: walk.into_iter(),
        }
    }

    /// Builds a candidate from a walkdir entry
    ///
    /// Returns `Ok(None)` for directories. Non-UTF-8 names and
    /// relative-path failures surface as per-entry errors.
    fn candidate(&self, entry: &DirEntry) -> Result<Option<FileCandidate>, SiftError> {
        if entry.file_type().is_dir() {
            return Ok(None);
        }
        let path = entry.path();
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| SiftError::NonUtf8Name(path.to_path_buf()))?
            .to_string();
        let parent = path.parent().unwrap_or(&self.root);
        let relative = parent.strip_prefix(&self.root).unwrap_or(Path::new(""));
        let sub_dir = Utf8PathBuf::from_path_buf(relative.to_path_buf())
            .map_err(SiftError::NonUtf8Name)?;
        Ok(Some(FileCandidate {
            path: path.to_path_buf(),
            name,
            sub_dir,
        }))
    }
}

impl Iterator for Walker {
    type Item = Result<FileCandidate, WalkFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.inner.next()?;
            match entry {
                Ok(entry) => match self.candidate(&entry) {
                    Ok(Some(candidate)) => return Some(Ok(candidate)),
                    Ok(None) => continue,
                    Err(error) => {
                        return Some(Err(WalkFailure {
                            error,
                            fatal: false,
                        }))
                    }
                },
                Err(err) => {
                    // failures on the root itself abort the walk
                    let fatal =
                        err.depth() == 0 || err.path().is_some_and(|p| p == self.root.as_path());
                    return Some(Err(WalkFailure {
                        error: SiftError::Walkdir(err),
                        fatal,
                    }));
                }
            }
        }
    }
}
