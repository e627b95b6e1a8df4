use crate::common::command::{
    commit_file, committed_repository_dir, get_head_commit_sha, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_with_staged_changes_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    write_file(FileSpec::new(dir.join("c.txt"), "c\n".to_string()));
    run_gitlet_command(dir, &["add", "c.txt"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");
}

#[rstest]
fn merge_unknown_branch_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["merge", "nowhere"])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
}

#[rstest]
fn merge_with_itself_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["merge", "master"])
        .assert()
        .success()
        .stdout("Cannot merge a branch with itself.\n");
}

#[rstest]
fn merge_refuses_to_overwrite_untracked_files(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "a.txt", "master a\n", "Master edits a");
    let head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "c.txt", "tracked c\n", "Other adds c");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    write_file(FileSpec::new(dir.join("c.txt"), "precious\n".to_string()));

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n")
        .stderr(predicate::str::is_empty());

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(read_file(&dir.join("c.txt")), "precious\n");

    Ok(())
}
