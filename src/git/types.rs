use serde::{Deserialize, Serialize};

use super::parser::extract_commit_sha;
use crate::error::GitResult;

/// Change kind reported for a single path in a short-status listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileChangeStatus {
    Modified,
    Added,
    Deleted,
    Untracked,
    Renamed,
}

/// Represents a file entry from git status --porcelain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatusRecord {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Status")]
    pub status: FileChangeStatus,
    /// True when the change sits in the index rather than the work tree
    #[serde(rename = "Staged")]
    pub staged: bool,
}

/// Represents a branch from git branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "IsCurrent")]
    pub is_current: bool,
    /// Always false: only the local listing syntax is recognized
    #[serde(rename = "IsRemote")]
    pub is_remote: bool,
}

/// Numeric ranges of an `@@ -a,b +c,d @@` line, plus the line itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunkHeader {
    #[serde(rename = "Header")]
    pub text: String,
    #[serde(rename = "OldStart")]
    pub old_start: u32,
    #[serde(rename = "OldLines")]
    pub old_lines: u32,
    #[serde(rename = "NewStart")]
    pub new_start: u32,
    #[serde(rename = "NewLines")]
    pub new_lines: u32,
}

/// One `@@` block of a unified diff and its body lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    #[serde(rename = "Header")]
    pub header: String,
    #[serde(rename = "OldStart")]
    pub old_start: u32,
    #[serde(rename = "OldLines")]
    pub old_lines: u32,
    #[serde(rename = "NewStart")]
    pub new_start: u32,
    #[serde(rename = "NewLines")]
    pub new_lines: u32,
    /// Body lines verbatim, markers included, header excluded
    #[serde(rename = "Lines")]
    pub lines: Vec<String>,
}

impl DiffHunk {
    /// Open a hunk from a successfully parsed header
    pub fn from_header(header: HunkHeader) -> Self {
        Self {
            header: header.text,
            old_start: header.old_start,
            old_lines: header.old_lines,
            new_start: header.new_start,
            new_lines: header.new_lines,
            lines: Vec::new(),
        }
    }

    /// Open a hunk whose header could not be parsed; ranges stay at zero
    pub fn degraded(header: &str) -> Self {
        Self {
            header: header.to_string(),
            ..Self::default()
        }
    }

    /// Number of body lines starting with `+`
    pub fn added_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.starts_with('+')).count()
    }

    /// Number of body lines starting with `-`
    pub fn removed_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.starts_with('-')).count()
    }
}

/// Parsed diff for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    #[serde(rename = "FilePath")]
    pub file_path: String,
    /// The input exactly as given, kept even when no hunk was recognized
    #[serde(rename = "Diff")]
    pub raw_text: String,
    #[serde(rename = "Hunks")]
    pub hunks: Vec<DiffHunk>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }
}

/// Short SHA reported by a commit; empty when the output had no summary line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOutcome {
    #[serde(rename = "CommitSHA")]
    pub short_sha: String,
}

impl CommitOutcome {
    pub fn from_output(output: &str) -> GitResult<Self> {
        Ok(Self {
            short_sha: extract_commit_sha(output)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.short_sha.is_empty()
    }
}
