use crate::common::command::{committed_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_reports_every_section(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("c.txt"), "c\n".to_string()));
    run_gitlet_command(dir, &["add", "c.txt"]).assert().success();
    run_gitlet_command(dir, &["rm", "b.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "edited\n".to_string()));
    write_file(FileSpec::new(dir.join("d.txt"), "d\n".to_string()));

    let output = run_gitlet_command(dir, &["status"]).output()?;

    assert_eq!(
        String::from_utf8(output.stdout)?,
        "=== Branches ===\n\
         *master\n\
         other\n\
         \n\
         === Staged Files ===\n\
         c.txt\n\
         \n\
         === Removed Files ===\n\
         b.txt\n\
         \n\
         === Modifications Not Staged For Commit ===\n\
         a.txt (modified)\n\
         \n\
         === Untracked Files ===\n\
         d.txt\n\
         \n"
    );

    Ok(())
}

#[rstest]
fn status_reports_deleted_and_changed_staged_files(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("c.txt"), "c\n".to_string()));
    run_gitlet_command(dir, &["add", "c.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("c.txt"), "c2\n".to_string()));
    std::fs::remove_file(dir.join("a.txt"))?;

    let output = run_gitlet_command(dir, &["status"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(
        "=== Modifications Not Staged For Commit ===\n\
         a.txt (deleted)\n\
         c.txt (modified)\n\
         \n"
    ));

    Ok(())
}
