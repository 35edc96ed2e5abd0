use crate::common::command::{repository_dir, run_svcs_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_file_to_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = write_generated_files(repository_dir.path(), 3);
    let file_names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();

    for file_name in &file_names {
        run_svcs_command(repository_dir.path(), &["add", file_name])
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("The file '{file_name}' is tracked.\n")));
    }

    let index = std::fs::read_to_string(repository_dir.path().join("vcs/index.txt"))?;
    assert_eq!(index.lines().collect::<Vec<_>>(), file_names);

    Ok(())
}

#[rstest]
fn add_normalizes_relative_paths(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(repository_dir.path().join("docs"))?;
    std::fs::write(repository_dir.path().join("docs/readme.txt"), "read me")?;

    run_svcs_command(repository_dir.path(), &["add", "./docs/../docs/readme.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("The file 'docs/readme.txt' is tracked.\n"));

    let index = std::fs::read_to_string(repository_dir.path().join("vcs/index.txt"))?;
    assert_eq!(index, "docs/readme.txt\n");

    Ok(())
}
