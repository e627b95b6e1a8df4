use crate::common::command::{committed_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_the_committed_version_again_unstages_the_file(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("a.txt"), "changed\n".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "a\n".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));

    run_gitlet_command(dir, &["commit", "nothing new"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}

#[rstest]
fn adding_a_removed_file_cancels_the_removal(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["rm", "b.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("b.txt"), "b\n".to_string()));
    run_gitlet_command(dir, &["add", "b.txt"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));
}
