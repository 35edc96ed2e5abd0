use crate::common::command::{repository_dir, run_svcs_command, svcs_commit, svcs_commit_id};
use crate::common::read;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::rstest;

#[rstest]
fn commit_that_cannot_read_the_author_stores_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();

    // a directory where the config file belongs makes the username unreadable
    std::fs::create_dir_all(root.join("vcs/config.txt"))?;

    svcs_commit(root, "first").assert().code(1);

    let stored = std::fs::read_dir(root.join("vcs/commits"))
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(stored, 0);

    std::fs::remove_dir(root.join("vcs/config.txt"))?;
    let id = svcs_commit_id(root, "first");

    assert!(read(root, "vcs/log.txt").starts_with(&format!("commit {id}\n")));

    Ok(())
}
