use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn init_twice_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let head_before = std::fs::read(init_repository_dir.path().join(".gitlet/refs/heads/master"))?;

    run_gitlet_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout("A Gitlet version-control system already exists in the current directory.\n");

    let head_after = std::fs::read(init_repository_dir.path().join(".gitlet/refs/heads/master"))?;
    assert_eq!(head_before, head_after);

    Ok(())
}
