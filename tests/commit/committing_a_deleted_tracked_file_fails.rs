use crate::common::command::{committed_repository_dir, svcs_commit};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn committing_a_deleted_tracked_file_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    std::fs::remove_file(root.join("a/2.txt"))?;

    svcs_commit(root, "Second commit")
        .assert()
        .code(5)
        .stderr(predicate::eq("Can't find 'a/2.txt'.\n"));

    assert_eq!(std::fs::read_dir(root.join("vcs/commits"))?.count(), 1);

    Ok(())
}
