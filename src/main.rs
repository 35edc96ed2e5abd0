use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use svcs::areas::repository::Repository;
use svcs::artifacts::core::PagedOutput;
use svcs::commands::porcelain::help::help;
use svcs::error::VcsError;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SVCS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "svcs",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple version control system",
    long_about = "Tracks a set of files, stores full copies of them in content-addressed \
    commit directories and restores any stored commit on demand.",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "SVCS_ROOT",
        help = "The working directory holding the vcs directory (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[arg(long, help = "Print the command summary")]
    help: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "config", about = "Get or set the username")]
    Config {
        #[arg(index = 1, help = "The new username")]
        name: Option<String>,
    },
    #[command(name = "add", about = "List tracked files or track a file")]
    Add {
        #[arg(index = 1, help = "The file or directory to track")]
        path: Option<PathBuf>,
    },
    #[command(name = "reset", about = "Untrack a file or every file")]
    Reset {
        #[arg(index = 1, help = "The file or directory to untrack")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Save the tracked files",
        long_about = "This command stores a full copy of every tracked file under an identifier \
        derived from their contents. Committing unchanged content is a no-op."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
        #[arg(
            short = 'm',
            long = "message",
            conflicts_with = "message",
            help = "The commit message"
        )]
        flag_message: Option<String>,
    },
    #[command(name = "log", about = "Show all commits, newest first")]
    Log,
    #[command(name = "checkout", about = "Restore the files of a commit")]
    Checkout {
        #[arg(index = 1, help = "The commit id, or an unambiguous prefix of it")]
        target: Option<String>,
    },
    #[command(name = "delete", about = "Delete the vcs directory")]
    Delete,
    #[command(external_subcommand)]
    External(Vec<String>),
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<VcsError>() {
            Some(vcs_error) => {
                eprintln!("{vcs_error}");
                ExitCode::from(vcs_error.exit_code())
            }
            None => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::UnknownArgument | ErrorKind::TooManyValues | ErrorKind::ArgumentConflict => {
                return Err(VcsError::InvalidArgumentCount.into());
            }
            _ => err.exit(),
        },
    };

    init_colors();

    let Some(command) = cli.command else {
        help(&mut std::io::stdout())?;
        return Ok(());
    };

    if cli.help {
        return Err(VcsError::InvalidArgumentCount.into());
    }

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    // long histories go through the pager when a person is reading them
    if matches!(command, Commands::Log) && std::io::stdout().is_terminal() {
        let output = PagedOutput::new();
        let pager = output.pager();
        let repository = Repository::new(&root, Box::new(output))?;

        repository.log()?;
        return PagedOutput::show(pager);
    }

    let repository = Repository::new(&root, Box::new(std::io::stdout()))?;

    match command {
        Commands::Config { name } => {
            repository.configure(name.as_deref())?;
        }
        Commands::Add { path: Some(path) } => {
            repository.add(&path)?;
        }
        Commands::Add { path: None } => {
            repository.list_tracked()?;
        }
        Commands::Reset { path: Some(path) } => {
            repository.reset(&path)?;
        }
        Commands::Reset { path: None } => repository.reset_all()?,
        Commands::Commit {
            message,
            flag_message,
        } => {
            repository.commit(flag_message.or(message).as_deref())?;
        }
        Commands::Log => repository.log()?,
        Commands::Checkout { target } => {
            repository.checkout(target.as_deref())?;
        }
        Commands::Delete => {
            repository.delete()?;
        }
        Commands::External(args) => {
            let name = args.into_iter().next().unwrap_or_default();
            return Err(VcsError::UnknownCommand(name).into());
        }
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn init_colors() {
    if !std::io::stdout().is_terminal() || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}
