// filter.rs
use crate::config::{CombineMode, RunConfig};
use crate::content::{self, ContentScratch};
use crate::error::SiftError;
use crate::pattern::FilterPattern;
use crate::walker::FileCandidate;

/// Decides whether a candidate is a match
///
/// Combines the compiled name pattern with the content-term scan. The
/// pattern, terms and combine mode are fixed for the run; the scratch
/// buffer is reused across all candidates.
pub struct SelectionFilter {
    pattern: FilterPattern,
    terms: Vec<Vec<u8>>,
    combine: CombineMode,
    scratch: ContentScratch,
}

impl SelectionFilter {
    /// Creates a filter from the run configuration
    pub fn new(config: &RunConfig) -> Self {
        Self {
            pattern: FilterPattern::compile(&config.name_filter),
            terms: config.terms.clone(),
            combine: config.combine,
            scratch: ContentScratch::new(),
        }
    }

    /// Checks whether the candidate matches name and content criteria
    ///
    /// The cheap name check runs first. With no terms configured a name
    /// match alone decides; otherwise the file body is scanned for all
    /// or any of the terms depending on the combine mode.
    ///
    /// # Errors
    ///
    /// I/O failures from the content scan propagate to the caller,
    /// which decides whether they are skippable.
    pub fn is_match(&mut self, candidate: &FileCandidate) -> Result<bool, SiftError> {
        if !self.pattern.matches(&candidate.name) {
            return Ok(false);
        }
        if self.terms.is_empty() {
            return Ok(true);
        }
        let found = match self.combine {
            CombineMode::All => {
                content::file_has_all(&candidate.path, &mut self.scratch, &self.terms)?
            }
            CombineMode::Any => {
                content::file_has_any(&candidate.path, &mut self.scratch, &self.terms)?
            }
        };
        Ok(found)
    }
}
