use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_a_file_twice_keeps_both_entries(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("a.txt").write_str("hello")?;

    run_svcs_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_svcs_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::eq("Tracked files:\na.txt\na.txt\n"));

    Ok(())
}
