// runner.rs
use crate::actions::ActionProcessor;
use crate::config::RunConfig;
use crate::error::SiftError;
use crate::filter::SelectionFilter;
use crate::walker::Walker;

/// Result of a completed run
///
/// Exactly one of the terminal lines has been printed by the time this
/// is returned: the summary, the bare count, nothing (print command
/// without matches) or an `error:` line when `failure` is set.
#[derive(Debug)]
pub struct RunOutcome {
    /// Number of candidates that matched and were processed
    pub count: usize,

    /// The fatal error that stopped iteration, if any
    pub failure: Option<SiftError>,
}

impl RunOutcome {
    /// Reports whether the run completed without a fatal error
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Drives one run: walk, filter, act, summarize
///
/// Candidates are pulled from the walker one at a time. A per-file
/// error prints a warning (unless silent mode is active or the file
/// vanished) and iteration continues; a failure on the walk root stops
/// iteration immediately. The processor's summary is emitted in every
/// case before returning.
pub fn run(config: &RunConfig) -> RunOutcome {
    let mut filter = SelectionFilter::new(config);
    let mut processor = match ActionProcessor::new(config) {
        Ok(processor) => processor,
        Err(err) => {
            println!("error: {err}");
            return RunOutcome {
                count: 0,
                failure: Some(err),
            };
        }
    };

    let mut count = 0;
    let mut failure = None;

    for entry in Walker::new(&config.input_dir, config.recursive) {
        let candidate = match entry {
            Ok(candidate) => candidate,
            Err(walk_failure) => {
                if walk_failure.fatal {
                    failure = Some(walk_failure.error);
                    break;
                }
                warn(config, &walk_failure.error);
                continue;
            }
        };
        let processed = filter.is_match(&candidate).and_then(|matched| {
            if matched {
                processor.process_file(&candidate).map(|()| true)
            } else {
                Ok(false)
            }
        });
        match processed {
            Ok(true) => count += 1,
            Ok(false) => {}
            Err(err) => warn(config, &err),
        }
    }

    processor.summarize(count, failure.as_ref());
    RunOutcome { count, failure }
}

/// Prints a warning line unless suppressed
///
/// Silent mode suppresses all warnings; not-found races are never
/// reported because the vanished file is simply no longer a candidate.
fn warn(config: &RunConfig, err: &SiftError) {
    if !config.silent && !err.is_not_found() {
        println!("warning: {err}");
    }
}
