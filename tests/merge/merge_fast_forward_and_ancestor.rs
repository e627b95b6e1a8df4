use crate::common::command::{
    commit_file, committed_repository_dir, get_branch_commit_sha, get_head_commit_sha,
    run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_fast_forwards_when_head_is_behind(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "c.txt", "c\n", "Other adds c");
    let other_head = get_branch_commit_sha(dir, "other")?;
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(get_head_commit_sha(dir)?, other_head);
    assert_eq!(read_file(&dir.join("c.txt")), "c\n");

    Ok(())
}

#[rstest]
fn merging_an_ancestor_changes_nothing(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "old"]).assert().success();
    commit_file(dir, "a.txt", "a2\n", "Master edits a");
    let head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["merge", "old"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(read_file(&dir.join("a.txt")), "a2\n");

    Ok(())
}
