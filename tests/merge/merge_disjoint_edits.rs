use crate::common::command::{
    commit_file, committed_repository_dir, get_branch_commit_sha, get_head_commit_sha,
    logged_commit_ids, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History:
///       A (a.txt, b.txt)
///      / \
///     B   C
///     |   |
///  master  other
///
/// B edits a.txt and C edits b.txt; the merge takes both edits.
#[rstest]
fn merge_disjoint_edits(committed_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "a.txt", "master a\n", "Master edits a");
    let master_head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "b.txt", "other b\n", "Other edits b");
    let other_head = get_branch_commit_sha(dir, "other")?;
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(&dir.join("a.txt")), "master a\n");
    assert_eq!(read_file(&dir.join("b.txt")), "other b\n");

    let ids = logged_commit_ids(dir)?;
    assert_eq!(ids[1], master_head);
    assert_ne!(ids[0], master_head);
    assert_ne!(ids[0], other_head);
    // the other branch is untouched
    assert_eq!(get_branch_commit_sha(dir, "other")?, other_head);

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n",
        ));

    Ok(())
}

#[rstest]
fn merge_applies_additions_and_removals_from_the_other_branch(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "m.txt", "master only\n", "Master adds m");

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    run_gitlet_command(dir, &["rm", "b.txt"]).assert().success();
    run_gitlet_command(dir, &["commit", "Other removes b"]).assert().success();
    commit_file(dir, "o.txt", "other only\n", "Other adds o");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"]).assert().success();

    assert!(!dir.join("b.txt").exists());
    assert_eq!(read_file(&dir.join("a.txt")), "a\n");
    assert_eq!(read_file(&dir.join("m.txt")), "master only\n");
    assert_eq!(read_file(&dir.join("o.txt")), "other only\n");

    // the merge commit tracks exactly the merged files
    run_gitlet_command(dir, &["checkout", "--", "b.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");

    Ok(())
}
