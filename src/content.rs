// content.rs
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Default scratch capacity for content scans (4 MiB)
const SCRATCH_CAPACITY: usize = 4 * 1024 * 1024;

/// A reusable read buffer for content-term scans
///
/// One scratch buffer is allocated per run and shared across all
/// candidates, so repeated scans incur no reallocation. Occurrences
/// spanning a read boundary are found by carrying the trailing bytes
/// of each chunk over into the next one.
#[derive(Debug)]
pub struct ContentScratch {
    buf: Vec<u8>,
}

impl ContentScratch {
    /// Creates a scratch buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(SCRATCH_CAPACITY)
    }

    /// Creates a scratch buffer with a custom capacity
    ///
    /// The capacity must exceed the length of the longest search term,
    /// otherwise a term can never fit into a single chunk.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(2)],
        }
    }
}

impl Default for ContentScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether a file's contents contain all of the given terms
///
/// The file is read in chunks through the scratch buffer. The scan
/// stops early once every term has been seen.
///
/// # Arguments
///
/// * `path` - Path of the file to scan
/// * `scratch` - Reusable read buffer
/// * `terms` - Non-empty byte-string terms that must all occur
///
/// # Returns
///
/// `Ok(true)` if all terms occur, `Ok(false)` otherwise, `Err` on I/O failure
pub fn file_has_all(
    path: &Path,
    scratch: &mut ContentScratch,
    terms: &[Vec<u8>],
) -> io::Result<bool> {
    let mut found = vec![false; terms.len()];
    scan_file(path, scratch, terms, &mut |hits| {
        for (seen, hit) in found.iter_mut().zip(hits) {
            *seen = *seen || *hit;
        }
        found.iter().all(|&seen| seen)
    })
}

/// Checks whether a file's contents contain any of the given terms
///
/// The scan stops early at the first occurrence of any term.
///
/// # Arguments
///
/// * `path` - Path of the file to scan
/// * `scratch` - Reusable read buffer
/// * `terms` - Non-empty byte-string terms of which one must occur
///
/// # Returns
///
/// `Ok(true)` if any term occurs, `Ok(false)` otherwise, `Err` on I/O failure
pub fn file_has_any(
    path: &Path,
    scratch: &mut ContentScratch,
    terms: &[Vec<u8>],
) -> io::Result<bool> {
    scan_file(path, scratch, terms, &mut |hits| hits.iter().any(|&hit| hit))
}

/// Streams a file through the scratch buffer, reporting term hits per chunk
///
/// `decide` receives the per-term hit flags for the current chunk and
/// returns `true` once the overall result is settled, which ends the
/// scan early. The final `max_term_len - 1` bytes of each chunk are
/// kept at the front of the buffer for the next read, so terms that
/// straddle a chunk boundary are still found.
fn scan_file(
    path: &Path,
    scratch: &mut ContentScratch,
    terms: &[Vec<u8>],
    decide: &mut dyn FnMut(&[bool]) -> bool,
) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let buf = &mut scratch.buf;
    let max_term_len = terms.iter().map(Vec::len).max().unwrap_or(0);
    let mut hits = vec![false; terms.len()];
    let mut carry = 0;

    loop {
        let read = read_chunk(&mut file, &mut buf[carry..])?;
        if read == 0 {
            return Ok(false);
        }
        let filled = carry + read;
        for (hit, term) in hits.iter_mut().zip(terms) {
            *hit = contains(&buf[..filled], term);
        }
        if decide(&hits) {
            return Ok(true);
        }
        carry = max_term_len.saturating_sub(1).min(filled);
        buf.copy_within(filled - carry..filled, 0);
    }
}

/// Fills as much of `buf` as possible from the reader
fn read_chunk(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        let read = file.read(&mut buf[total..])?;
        if read == 0 {
            break;
        }
        total += read;
    }
    Ok(total)
}

/// Checks whether `haystack` contains `needle` as a contiguous substring
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}
