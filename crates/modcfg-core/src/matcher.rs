/// Where a file stands relative to one before/after pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// The original block is present this many times.
    Pristine(usize),
    AlreadyApplied,
    Unknown,
}

/// Byte offsets of every non-overlapping occurrence of `needle`.
pub fn find_occurrences(content: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    content.match_indices(needle).map(|(idx, _)| idx).collect()
}

/// Blocks are compared with surrounding whitespace removed; the inside is verbatim.
pub fn classify(content: &str, before: &str, after: &str) -> MatchState {
    let before = before.trim();
    let after = after.trim();

    let matches = find_occurrences(content, before);
    if !matches.is_empty() {
        MatchState::Pristine(matches.len())
    } else if content.contains(after) {
        MatchState::AlreadyApplied
    } else {
        MatchState::Unknown
    }
}

/// Replaces every occurrence of the trimmed `before` block with the trimmed `after` block.
pub fn replace_all(content: &str, before: &str, after: &str) -> String {
    content.replace(before.trim(), after.trim())
}
