use crate::common::command::{committed_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_unstages_a_new_file_and_keeps_it(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("c.txt"), "c\n".to_string()));
    run_gitlet_command(dir, &["add", "c.txt"]).assert().success();

    run_gitlet_command(dir, &["rm", "c.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.join("c.txt").is_file());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::ends_with("=== Untracked Files ===\nc.txt\n\n"));
}

#[rstest]
fn rm_tracked_file_deletes_it_and_stages_removal(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["rm", "a.txt"]).assert().success();

    assert!(!dir.join("a.txt").exists());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\na.txt\n\n"))
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n",
        ));
}

#[rstest]
fn rm_already_deleted_tracked_file_stages_removal(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    std::fs::remove_file(dir.join("b.txt")).expect("Failed to delete b.txt");

    run_gitlet_command(dir, &["rm", "b.txt"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\nb.txt\n\n"));
}

#[rstest]
fn rm_untracked_file_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("loose.txt"), "loose\n".to_string()));

    run_gitlet_command(dir, &["rm", "loose.txt"])
        .assert()
        .success()
        .stdout("No reason to remove the file.\n");

    assert!(dir.join("loose.txt").is_file());
}
