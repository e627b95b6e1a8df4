use crate::common::command::{
    commit_file, committed_repository_dir, get_head_commit_sha, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_file_from_head_discards_edits(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "edited\n".to_string()));

    run_gitlet_command(dir, &["checkout", "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "a\n");
}

#[rstest]
fn checkout_file_from_abbreviated_commit_id(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let first = get_head_commit_sha(dir)?;
    commit_file(dir, "a.txt", "a2\n", "Update a");

    run_gitlet_command(dir, &["checkout", &first[..8], "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "a\n");
    // the restored file is not staged
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "=== Modifications Not Staged For Commit ===\na.txt (modified)\n",
        ));

    Ok(())
}

#[rstest]
fn checkout_file_missing_from_commit_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["checkout", "--", "ghost.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
}

#[rstest]
fn checkout_file_from_unknown_commit_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(
        committed_repository_dir.path(),
        &["checkout", "0000000000", "--", "a.txt"],
    )
    .assert()
    .success()
    .stdout("No commit with that id exists.\n");
}
