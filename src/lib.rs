pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod output;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, AppResult, GitError, GitResult};
pub use git::{
    BranchRecord, CommitOutcome, DiffHunk, DiffResult, FileChangeStatus, FileStatusRecord,
    HunkHeader,
};
