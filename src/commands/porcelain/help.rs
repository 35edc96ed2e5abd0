use std::io::Write;

const COMMANDS: [(&str, &str); 10] = [
    ("config", "Get a username."),
    ("config {username}", "Set a username."),
    ("add", "Get list of tracked files."),
    ("add {filename}", "Add a file to the index."),
    ("reset", "Untrack every file."),
    ("reset {filename}", "Untrack a file."),
    ("log", "Show all the commits (commitID, author, comment) in reverse order."),
    ("commit {comment}", "Save changes."),
    ("checkout {commitID}", "Restore the files of a commit."),
    ("delete", "Delete the vcs directory."),
];

const NAME_WIDTH: usize = 24;

/// Print the command summary shown for `--help` or when no command is given
pub fn help(writer: &mut dyn Write) -> std::io::Result<()> {
    writeln!(writer, "These are SVCS commands:")?;
    for (usage, description) in COMMANDS {
        writeln!(writer, "{usage:<NAME_WIDTH$}{description}")?;
    }

    Ok(())
}
