use tracing::{debug, warn};

use super::types::{DiffHunk, DiffResult, HunkHeader};
use crate::error::{GitError, GitResult};

const HUNK_MARKER: &str = "@@";

/// Parse a hunk header line such as `@@ -10,6 +12,8 @@ fn main()`
///
/// A missing count (`-1` instead of `-1,3`) yields 0, and any number that
/// does not parse is also read as 0. Only a missing `@@` segment or fewer
/// than two range tokens are errors.
pub fn parse_hunk_header(line: &str) -> GitResult<HunkHeader> {
    let segments: Vec<&str> = line.splitn(3, HUNK_MARKER).collect();
    if segments.len() < 2 {
        return Err(GitError::InvalidHunkHeader(line.to_string()));
    }

    let range_info = segments[1].trim();
    let ranges: Vec<&str> = range_info.split_whitespace().collect();
    if ranges.len() < 2 {
        return Err(GitError::InvalidRangeInfo(range_info.to_string()));
    }

    let (old_start, old_lines) = parse_range(ranges[0], '-');
    let (new_start, new_lines) = parse_range(ranges[1], '+');

    Ok(HunkHeader {
        text: line.to_string(),
        old_start,
        old_lines,
        new_start,
        new_lines,
    })
}

/// Split `-start[,count]` / `+start[,count]` into its two numbers
fn parse_range(token: &str, sign: char) -> (u32, u32) {
    let token = token.strip_prefix(sign).unwrap_or(token);
    let mut parts = token.split(',');

    let start = parts.next().map(parse_number).unwrap_or(0);
    let count = parts.next().map(parse_number).unwrap_or(0);

    (start, count)
}

fn parse_number(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

/// Where the diff walker is: before the first header, or inside a hunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffState {
    NoHunk,
    InHunk(DiffHunk),
}

impl DiffState {
    /// Advance by one line, pushing any hunk closed by a new header onto `hunks`
    pub fn feed(self, line: &str, hunks: &mut Vec<DiffHunk>) -> Self {
        if line.starts_with(HUNK_MARKER) {
            if let DiffState::InHunk(open) = self {
                hunks.push(open);
            }
            return DiffState::InHunk(open_hunk(line));
        }

        match self {
            DiffState::NoHunk => DiffState::NoHunk,
            DiffState::InHunk(mut hunk) => {
                hunk.lines.push(line.to_string());
                DiffState::InHunk(hunk)
            }
        }
    }

    /// Close the hunk still open at end of input, if any
    pub fn finish(self, hunks: &mut Vec<DiffHunk>) {
        if let DiffState::InHunk(open) = self {
            hunks.push(open);
        }
    }
}

fn open_hunk(line: &str) -> DiffHunk {
    match parse_hunk_header(line) {
        Ok(header) => DiffHunk::from_header(header),
        Err(e) => {
            warn!(error = %e, "keeping hunk with unparsed header");
            DiffHunk::degraded(line)
        }
    }
}

/// Parse unified diff output for a single file
///
/// Anything before the first `@@` line (the `diff --git`, `index`, `---`
/// and `+++` preamble) is dropped. Every `\n` separates a line, so output
/// ending in a newline gives the last hunk a trailing empty line. A header that fails to parse still opens
/// a hunk, with all four ranges left at zero.
pub fn parse_diff(file_path: &str, output: &str) -> GitResult<DiffResult> {
    let mut hunks = Vec::new();

    if !output.trim().is_empty() {
        let mut state = DiffState::NoHunk;
        let mut preamble = 0usize;

        for line in output.split('\n') {
            if matches!(state, DiffState::NoHunk) && !line.starts_with(HUNK_MARKER) {
                preamble += 1;
            }
            state = state.feed(line, &mut hunks);
        }
        state.finish(&mut hunks);

        debug!(file_path, hunks = hunks.len(), preamble, "parsed diff");
    }

    Ok(DiffResult {
        file_path: file_path.to_string(),
        raw_text: output.to_string(),
        hunks,
    })
}
