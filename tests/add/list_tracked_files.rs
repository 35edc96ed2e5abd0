use crate::common::command::{repository_dir, run_svcs_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn list_without_tracked_files(repository_dir: TempDir) {
    run_svcs_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::eq("Add a file to the index.\n"));
}

#[rstest]
fn list_tracked_files_in_insertion_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = write_generated_files(repository_dir.path(), 4);
    let mut file_names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    file_names.reverse();

    for file_name in &file_names {
        run_svcs_command(repository_dir.path(), &["add", file_name])
            .assert()
            .success();
    }

    let expected = format!("Tracked files:\n{}\n", file_names.join("\n"));
    run_svcs_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
