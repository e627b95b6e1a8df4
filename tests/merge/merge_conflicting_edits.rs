use crate::common::command::{
    commit_file, committed_repository_dir, get_branch_commit_sha, get_head_commit_sha,
    run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_conflicting_edits(committed_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "a.txt", "master\n", "Master edits a");
    let master_head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "a.txt", "other\n", "Other edits a");
    let other_head = get_branch_commit_sha(dir, "other")?;
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("a.txt")),
        "<<<<<<< HEAD\nmaster\n=======\nother\n>>>>>>>\n"
    );

    // the conflicted result is committed with both parents
    let merge_line = format!("Merge: {} {}\n", &master_head[..7], &other_head[..7]);
    run_gitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(merge_line))
        .stdout(predicate::str::contains("Merged other into master.\n"));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n",
        ));

    Ok(())
}

#[rstest]
fn conflict_with_a_deleted_side_uses_empty_content(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "a.txt", "master\n", "Master edits a");

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    run_gitlet_command(dir, &["rm", "a.txt"]).assert().success();
    run_gitlet_command(dir, &["commit", "Other removes a"]).assert().success();
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("a.txt")),
        "<<<<<<< HEAD\nmaster\n=======\n>>>>>>>\n"
    );
}
