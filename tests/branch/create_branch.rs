use crate::common::command::{
    commit_file, committed_repository_dir, get_branch_commit_sha, get_head_commit_sha,
    run_gitlet_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn new_branch_points_at_head_without_switching(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(get_branch_commit_sha(dir, "feature")?, head);

    // later commits only move the active branch
    commit_file(dir, "a.txt", "a2\n", "Update a");
    assert_eq!(get_branch_commit_sha(dir, "feature")?, head);
    assert_ne!(get_head_commit_sha(dir)?, head);

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Branches ===\nfeature\n*master\n"));

    Ok(())
}

#[rstest]
fn duplicate_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "feature"]).assert().success();

    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout("A branch with that name already exists.\n");

    run_gitlet_command(dir, &["branch", "master"])
        .assert()
        .success()
        .stdout("A branch with that name already exists.\n");
}

#[rstest]
#[case("..")]
#[case(".hidden")]
#[case("bad.lock")]
#[case("with space")]
fn invalid_branch_name_fails(committed_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(committed_repository_dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(format!("Invalid branch name: {name}\n"));
}
