mod helpers;

use gitpane::git::{
    CommitOutcome, FileChangeStatus, parse_branch_list, parse_diff, parse_status_porcelain,
};
use helpers::{create_commit, create_test_repo, git};
use std::fs;

#[test]
fn test_status_of_real_repository() {
    let (_temp, repo_path) = create_test_repo();
    create_commit(&repo_path, "tracked.txt", "one\n", "Initial commit");
    create_commit(&repo_path, "doomed.txt", "bye\n", "Add doomed file");

    // Unstaged modification
    fs::write(repo_path.join("tracked.txt"), "one\ntwo\n").unwrap();
    // Staged addition
    fs::write(repo_path.join("added.txt"), "new\n").unwrap();
    git(&repo_path, &["add", "added.txt"]);
    // Unstaged deletion
    fs::remove_file(repo_path.join("doomed.txt")).unwrap();
    // Untracked
    fs::write(repo_path.join("untracked.txt"), "?\n").unwrap();

    let output = git(&repo_path, &["status", "--porcelain"]);
    let entries = parse_status_porcelain(&output).unwrap();

    let find = |path: &str| {
        entries
            .iter()
            .find(|e| e.path == path)
            .unwrap_or_else(|| panic!("{} missing from {:?}", path, entries))
    };

    assert_eq!(entries.len(), 4);
    assert_eq!(find("tracked.txt").status, FileChangeStatus::Modified);
    assert!(!find("tracked.txt").staged);
    assert_eq!(find("added.txt").status, FileChangeStatus::Added);
    assert!(find("added.txt").staged);
    assert_eq!(find("doomed.txt").status, FileChangeStatus::Deleted);
    assert!(!find("doomed.txt").staged);
    assert_eq!(find("untracked.txt").status, FileChangeStatus::Untracked);
    assert!(!find("untracked.txt").staged);
}

#[test]
fn test_status_staged_rename() {
    let (_temp, repo_path) = create_test_repo();
    create_commit(&repo_path, "old.txt", "content that git can track\n", "Initial commit");

    git(&repo_path, &["mv", "old.txt", "new.txt"]);

    let output = git(&repo_path, &["status", "--porcelain"]);
    let entries = parse_status_porcelain(&output).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, FileChangeStatus::Renamed);
    assert!(entries[0].staged);
    assert_eq!(entries[0].path, "old.txt -> new.txt");
}

#[test]
fn test_status_clean_repository() {
    let (_temp, repo_path) = create_test_repo();
    create_commit(&repo_path, "a.txt", "a\n", "Initial commit");

    let output = git(&repo_path, &["status", "--porcelain"]);
    assert!(parse_status_porcelain(&output).unwrap().is_empty());
}

#[test]
fn test_branches_of_real_repository() {
    let (_temp, repo_path) = create_test_repo();
    create_commit(&repo_path, "a.txt", "a\n", "Initial commit");
    git(&repo_path, &["branch", "develop"]);
    git(&repo_path, &["branch", "feature/login"]);

    let current = git(&repo_path, &["rev-parse", "--abbrev-ref", "HEAD"]);
    let output = git(&repo_path, &["branch"]);
    let branches = parse_branch_list(&output).unwrap();

    assert_eq!(branches.len(), 3);
    assert!(branches.iter().any(|b| b.name == "develop" && !b.is_current));
    assert!(branches.iter().any(|b| b.name == "feature/login" && !b.is_current));

    let checked_out: Vec<_> = branches.iter().filter(|b| b.is_current).collect();
    assert_eq!(checked_out.len(), 1);
    assert_eq!(checked_out[0].name, current.trim());
}

#[test]
fn test_diff_of_real_repository() {
    let (_temp, repo_path) = create_test_repo();
    let original: String = (1..=20).map(|i| format!("line {}\n", i)).collect();
    create_commit(&repo_path, "file.txt", &original, "Initial commit");

    let changed = original
        .replace("line 2\n", "line 2\ninserted\n")
        .replace("line 18\n", "");
    fs::write(repo_path.join("file.txt"), changed).unwrap();

    let output = git(&repo_path, &["diff", "--no-color", "file.txt"]);
    let result = parse_diff("file.txt", &output).unwrap();

    assert_eq!(result.raw_text, output);
    assert_eq!(result.hunks.len(), 2);

    let first = &result.hunks[0];
    assert_eq!(first.old_start, 1);
    assert_eq!(first.added_lines(), 1);
    assert_eq!(first.removed_lines(), 0);
    assert!(first.lines.contains(&"+inserted".to_string()));

    let second = &result.hunks[1];
    assert!(second.old_start > first.old_start);
    assert_eq!(second.removed_lines(), 1);
    assert!(second.lines.contains(&"-line 18".to_string()));
}

#[test]
fn test_diff_of_unchanged_file() {
    let (_temp, repo_path) = create_test_repo();
    create_commit(&repo_path, "file.txt", "same\n", "Initial commit");

    let output = git(&repo_path, &["diff", "--no-color", "file.txt"]);
    let result = parse_diff("file.txt", &output).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.raw_text, output);
}

#[test]
fn test_commit_sha_of_real_commit() {
    let (_temp, repo_path) = create_test_repo();
    create_commit(&repo_path, "a.txt", "a\n", "Initial commit");

    let output = create_commit(&repo_path, "b.txt", "b\n", "Second commit");
    let outcome = CommitOutcome::from_output(&output).unwrap();

    let head = git(&repo_path, &["rev-parse", "HEAD"]);
    assert!(!outcome.is_empty());
    assert!(head.trim().starts_with(&outcome.short_sha));
}
