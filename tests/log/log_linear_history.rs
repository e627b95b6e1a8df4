use crate::common::command::{
    COMMIT_DATE_DISPLAY, EPOCH_DISPLAY, commit_file, init_repository_dir, logged_commit_ids,
    run_gitlet_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_prints_history_most_recent_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    commit_file(dir, "x.txt", "v1", "first");
    commit_file(dir, "x.txt", "v2", "second");

    let ids = logged_commit_ids(dir)?;
    assert_eq!(ids.len(), 3);

    let output = run_gitlet_command(dir, &["log"]).output()?;
    let expected = format!(
        "===\ncommit {}\nDate: {COMMIT_DATE_DISPLAY}\nsecond\n\n\
         ===\ncommit {}\nDate: {COMMIT_DATE_DISPLAY}\nfirst\n\n\
         ===\ncommit {}\nDate: {EPOCH_DISPLAY}\ninitial commit\n\n",
        ids[0], ids[1], ids[2]
    );
    assert_eq!(String::from_utf8(output.stdout)?, expected);

    Ok(())
}

#[rstest]
fn log_follows_the_active_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "x.txt", "v1", "shared");

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    commit_file(dir, "x.txt", "v2", "master only");

    run_gitlet_command(dir, &["checkout", "side"]).assert().success();

    let output = run_gitlet_command(dir, &["log"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("shared"));
    assert!(!stdout.contains("master only"));

    Ok(())
}
