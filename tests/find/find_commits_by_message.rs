use crate::common::command::{
    commit_file, get_branch_commit_sha, get_head_commit_sha, init_repository_dir,
    run_gitlet_command,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_prints_every_matching_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    commit_file(dir, "x.txt", "master", "same message");
    let master_head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["checkout", "side"]).assert().success();
    commit_file(dir, "x.txt", "side", "same message");
    let side_head = get_branch_commit_sha(dir, "side")?;

    let mut expected = vec![master_head, side_head];
    expected.sort();

    run_gitlet_command(dir, &["find", "same message"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.join("\n")));

    Ok(())
}

#[rstest]
fn find_matches_whole_messages_only(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "x.txt", "v1", "a longer message");

    run_gitlet_command(dir, &["find", "longer"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}
