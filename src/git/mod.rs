pub mod diff;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use diff::{DiffState, parse_diff, parse_hunk_header};
pub use parser::{extract_commit_sha, parse_branch_list, parse_status_porcelain};
pub use types::{
    BranchRecord, CommitOutcome, DiffHunk, DiffResult, FileChangeStatus, FileStatusRecord,
    HunkHeader,
};
