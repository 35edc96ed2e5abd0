use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_without_commits(repository_dir: TempDir) {
    run_svcs_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::eq("No commits yet.\n"));
}
