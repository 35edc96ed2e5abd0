use crate::common::command::{repository_dir, run_svcs_command, svcs_commit_id};
use crate::common::read;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::index_file("vcs/index.txt")]
#[case::storage_directory("vcs")]
#[case::roundabout_path("./vcs/../vcs/index.txt")]
fn adding_files_inside_the_vcs_directory_is_rejected(
    repository_dir: TempDir,
    #[case] path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();

    run_svcs_command(root, &["add", path])
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::ends_with(
            "is outside of the working directory.\n",
        ));

    assert_eq!(read(root, "vcs/index.txt"), "a.txt\n");

    Ok(())
}

#[rstest]
fn checkout_after_a_rejected_add_leaves_the_index_alone(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();
    run_svcs_command(root, &["add", "vcs/index.txt"]).assert().code(5);

    let id = svcs_commit_id(root, "first");
    assert!(!root.join("vcs/commits").join(&id).join("vcs").exists());

    run_svcs_command(root, &["reset", "a.txt"]).assert().success();
    let index_before = read(root, "vcs/index.txt");

    run_svcs_command(root, &["checkout", &id]).assert().success();

    assert_eq!(read(root, "vcs/index.txt"), index_before);

    Ok(())
}
