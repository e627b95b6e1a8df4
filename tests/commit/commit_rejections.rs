use crate::common::command::{committed_repository_dir, get_head_commit_sha, gitlet_commit};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_without_staged_changes_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    gitlet_commit(dir, "Nothing")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    assert_eq!(get_head_commit_sha(dir)?, head);

    Ok(())
}

#[rstest]
fn commit_with_empty_message_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "a2\n")?;
    crate::common::command::run_gitlet_command(dir, &["add", "a.txt"])
        .assert()
        .success();

    let head = get_head_commit_sha(dir)?;

    gitlet_commit(dir, "")
        .assert()
        .success()
        .stdout("Please enter a commit message.\n");

    assert_eq!(get_head_commit_sha(dir)?, head);

    Ok(())
}

#[rstest]
fn commit_with_whitespace_message_is_recorded(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "a2\n")?;
    crate::common::command::run_gitlet_command(dir, &["add", "a.txt"])
        .assert()
        .success();
    let head = get_head_commit_sha(dir)?;

    gitlet_commit(dir, "   ").assert().success().stdout("");

    assert_ne!(get_head_commit_sha(dir)?, head);

    Ok(())
}
