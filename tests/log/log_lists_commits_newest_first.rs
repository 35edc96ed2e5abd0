use crate::common::command::{repository_dir, run_svcs_command, svcs_commit_id};
use crate::common::read;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_lists_commits_newest_first(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    run_svcs_command(root, &["config", "John"]).assert().success();

    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();
    let first = svcs_commit_id(root, "first");

    repository_dir.child("a.txt").write_str("world")?;
    let second = svcs_commit_id(root, "second");

    let expected = format!(
        "commit {second}\nAuthor: John\nsecond\n\ncommit {first}\nAuthor: John\nfirst\n"
    );

    run_svcs_command(root, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected.clone()));

    assert_eq!(read(root, "vcs/log.txt"), expected);

    Ok(())
}

#[rstest]
fn author_defaults_to_the_configured_fallback(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();
    svcs_commit_id(root, "anonymous");

    run_svcs_command(root, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nAuthor: Username\nanonymous\n"));

    Ok(())
}

#[rstest]
fn author_is_read_from_the_environment_when_not_configured(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();

    run_svcs_command(root, &["commit", "from env"])
        .env("SVCS_AUTHOR_NAME", "Jane Doe")
        .assert()
        .success();

    assert!(read(root, "vcs/log.txt").contains("\nAuthor: Jane Doe\nfrom env\n"));

    Ok(())
}

#[rstest]
fn multi_line_messages_are_kept_intact(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();
    let id = svcs_commit_id(root, "summary\n\nbody line");

    run_svcs_command(root, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "commit {id}\nAuthor: Username\nsummary\n\nbody line\n"
        )));

    Ok(())
}

#[rstest]
fn messages_containing_header_lines_keep_the_log_readable(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    repository_dir.child("a.txt").write_str("hello")?;
    run_svcs_command(root, &["add", "a.txt"]).assert().success();

    let message = format!("x\n\ncommit {}", "a".repeat(64));
    let first = svcs_commit_id(root, &message);

    repository_dir.child("a.txt").write_str("world")?;
    let second = svcs_commit_id(root, "second");

    run_svcs_command(root, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "commit {second}\nAuthor: Username\nsecond\n\ncommit {first}\nAuthor: Username\n{message}\n"
        )));

    Ok(())
}
