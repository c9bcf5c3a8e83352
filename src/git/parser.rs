use tracing::debug;

use super::types::{BranchRecord, FileChangeStatus, FileStatusRecord};
use crate::error::GitResult;

/// Parse git status --porcelain output
///
/// Each line is `XY path`: X is the index column, Y the work-tree column,
/// the path starts at the fourth byte. Lines too short to hold all three
/// are skipped.
pub fn parse_status_porcelain(output: &str) -> GitResult<Vec<FileStatusRecord>> {
    let mut entries = Vec::new();

    if output.trim().is_empty() {
        return Ok(entries);
    }

    let mut skipped = 0usize;

    for line in output.split('\n') {
        let bytes = line.as_bytes();
        if bytes.len() < 4 {
            if !line.is_empty() {
                skipped += 1;
            }
            continue;
        }

        // Path must begin on a char boundary; anything else is not porcelain
        let Some(path) = line.get(3..) else {
            skipped += 1;
            continue;
        };

        let (status, staged) = classify(bytes[0], bytes[1]);

        entries.push(FileStatusRecord {
            path: path.trim().to_string(),
            status,
            staged,
        });
    }

    debug!(records = entries.len(), skipped, "parsed status listing");

    Ok(entries)
}

/// Map the two status columns to a change kind and staged flag.
///
/// Arms are tried top to bottom. Codes combine (`AM`, `MD`, ...), so the
/// index column always wins over the work-tree column.
fn classify(index: u8, worktree: u8) -> (FileChangeStatus, bool) {
    match (index, worktree) {
        (b'?', b'?') => (FileChangeStatus::Untracked, false),
        (b'A', _) => (FileChangeStatus::Added, true),
        (b'D', _) => (FileChangeStatus::Deleted, true),
        (b'R', _) => (FileChangeStatus::Renamed, true),
        (b'M', _) => (FileChangeStatus::Modified, true),
        (_, b'M') => (FileChangeStatus::Modified, false),
        (_, b'D') => (FileChangeStatus::Deleted, false),
        _ => (FileChangeStatus::Modified, false),
    }
}

/// Parse plain git branch output
pub fn parse_branch_list(output: &str) -> GitResult<Vec<BranchRecord>> {
    let mut branches = Vec::new();

    if output.trim().is_empty() {
        return Ok(branches);
    }

    let mut skipped = 0usize;

    for line in output.split('\n') {
        // Format: "* main" for the checked-out branch, "  feature-x" otherwise
        if line.len() < 3 {
            if !line.is_empty() {
                skipped += 1;
            }
            continue;
        }

        let Some(name) = line.get(2..) else {
            skipped += 1;
            continue;
        };

        branches.push(BranchRecord {
            name: name.trim().to_string(),
            is_current: line.starts_with('*'),
            is_remote: false,
        });
    }

    debug!(records = branches.len(), skipped, "parsed branch listing");

    Ok(branches)
}

/// Extract the short SHA from git commit output
///
/// Looks for the `[branch sha] subject` summary line and returns the text
/// between the first space and the first `]` of the first line that has
/// one. Returns an empty string when nothing matches.
pub fn extract_commit_sha(output: &str) -> GitResult<String> {
    for line in output.split('\n') {
        let line = line.trim();
        if !line.contains(']') {
            continue;
        }

        if let (Some(start), Some(end)) = (line.find(' '), line.find(']')) {
            if start < end {
                let sha = line[start + 1..end].trim();
                debug!(sha, "found commit summary line");
                return Ok(sha.to_string());
            }
        }
    }

    debug!("no commit summary line in output");
    Ok(String::new())
}
