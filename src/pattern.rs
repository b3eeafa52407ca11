// pattern.rs

/// A compiled wildcard name filter
///
/// The filter string is split on `*` wildcards into an ordered list of
/// literal byte segments. The first segment anchors the start of a
/// candidate name, the last segment anchors the end, and interior
/// segments must occur in order between them. Runs of consecutive `*`
/// collapse to a single wildcard; a trailing `*` contributes a trailing
/// empty segment, which matches the remainder of the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterPattern {
    segments: Vec<Vec<u8>>,
}

impl FilterPattern {
    /// Compiles a filter string into a FilterPattern
    ///
    /// ASCII whitespace and control bytes (any byte <= 32) are trimmed
    /// from both ends before splitting. A pattern that is empty after
    /// trimming compiles to zero segments and matches every name.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The wildcard filter string, e.g. `*.txt`
    ///
    /// # Returns
    ///
    /// The compiled pattern
    pub fn compile(pattern: &str) -> Self {
        let trimmed = trim_control(pattern.as_bytes());
        let mut segments = Vec::new();
        if !trimmed.is_empty() {
            let mut offset = 0;
            while offset < trimmed.len() {
                let star = seek_star(trimmed, offset);
                segments.push(trimmed[offset..star].to_vec());
                offset = seek_literal(trimmed, star);
            }
            // a trailing wildcard matches the rest of the name
            if trimmed.ends_with(b"*") {
                segments.push(Vec::new());
            }
        }
        Self { segments }
    }

    /// Checks whether a candidate name matches this pattern
    ///
    /// The first segment must be a prefix of the name. Each subsequent
    /// segment is located by scanning forward for its first occurrence;
    /// an empty segment matches the remainder of the name immediately.
    /// After the final segment the scan must have consumed the whole
    /// name. A pattern with zero segments matches unconditionally.
    ///
    /// # Arguments
    ///
    /// * `name` - The candidate file name
    ///
    /// # Returns
    ///
    /// `true` if the name matches, `false` otherwise
    pub fn matches(&self, name: &str) -> bool {
        let name = name.as_bytes();
        let Some(first) = self.segments.first() else {
            return true;
        };
        if !name.starts_with(first) {
            return false;
        }
        let mut offset = first.len();
        for segment in &self.segments[1..] {
            if segment.is_empty() {
                return true;
            }
            match find_from(name, segment, offset) {
                Some(pos) => offset = pos + segment.len(),
                None => return false,
            }
        }
        offset == name.len()
    }

    /// Returns the number of literal segments in the compiled pattern
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the compiled literal segments in order
    pub fn segments(&self) -> &[Vec<u8>] {
        &self.segments
    }
}

/// Strips bytes <= 32 from both ends of a byte slice
fn trim_control(bytes: &[u8]) -> &[u8] {
    let begin = bytes
        .iter()
        .position(|&b| b > 32)
        .unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b > 32).map_or(0, |i| i + 1);
    if begin < end {
        &bytes[begin..end]
    } else {
        &[]
    }
}

/// Advances to the next `*` byte at or after `offset`
fn seek_star(bytes: &[u8], mut offset: usize) -> usize {
    while offset < bytes.len() && bytes[offset] != b'*' {
        offset += 1;
    }
    offset
}

/// Advances past a run of `*` bytes starting at `offset`
fn seek_literal(bytes: &[u8], mut offset: usize) -> usize {
    while offset < bytes.len() && bytes[offset] == b'*' {
        offset += 1;
    }
    offset
}

/// Finds the first occurrence of `needle` in `haystack` at or after `from`
fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}
