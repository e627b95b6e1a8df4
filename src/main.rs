use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::user_error::UserError;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter
const LOG_FILTER_ENV: &str = "GITLET_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A small local version-control system",
    long_about = "Gitlet records snapshots of a working tree as commits, \
    keeps named branches of history, and merges them back together.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

COMMANDS:
{subcommands}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(name = "init", about = "Create a repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file, or stage its removal")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "checkout -- <file> restores a file from the head commit, \
        checkout <commit id> -- <file> restores it from the given commit, \
        and checkout <branch> switches to another branch."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name, or commit id when a file follows")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "File to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1)]
        commit_id: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    match run().await {
        Err(error) => match error.downcast_ref::<UserError>() {
            Some(user_error) => {
                println!("{user_error}");
                Ok(())
            }
            None => Err(error),
        },
        ok => ok,
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the command line, mapping clap failures to user errors
///
/// Outside a repository, bad operands for any command but `init` are
/// reported as a missing repository.
fn parse_cli<I, T>(args: I, initialized: bool) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    Cli::try_parse_from(&args).map_err(|error| match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
        ErrorKind::InvalidSubcommand => UserError::UnknownCommand.into(),
        ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => UserError::MissingCommand.into(),
        _ if !initialized && names_repository_command(&args) => UserError::NotInitialized.into(),
        _ => UserError::IncorrectOperands.into(),
    })
}

/// Whether the first operand is a known command that needs a repository
fn names_repository_command(args: &[OsString]) -> bool {
    args.get(1)
        .and_then(|name| name.to_str())
        .filter(|name| *name != "init")
        .is_some_and(|name| Cli::command().find_subcommand(name).is_some())
}

async fn run() -> Result<()> {
    let pwd = Repository::working_dir_from_env()?;
    let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

    let cli = parse_cli(std::env::args_os(), repository.is_initialized())?;

    if !matches!(cli.command, Commands::Init) && !repository.is_initialized() {
        return Err(UserError::NotInitialized.into());
    }

    match &cli.command {
        Commands::Init => repository.init().await?,
        Commands::Add { file } => repository.add(file).await?,
        Commands::Commit { message } => repository.commit(message).await?,
        Commands::Rm { file } => repository.rm(file).await?,
        Commands::Log => repository.log().await?,
        Commands::GlobalLog => repository.global_log().await?,
        Commands::Find { message } => repository.find(message).await?,
        Commands::Status => repository.status().await?,
        Commands::Checkout { target, file } => match (target, file) {
            (commit_id, Some(file)) => {
                repository
                    .checkout_file(commit_id.as_deref(), file)
                    .await?
            }
            (Some(branch), None) => repository.checkout_branch(branch).await?,
            (None, None) => return Err(UserError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository.branch(name).await?,
        Commands::RmBranch { name } => repository.rm_branch(name).await?,
        Commands::Reset { commit_id } => repository.reset(commit_id).await?,
        Commands::Merge { branch } => repository.merge(branch).await?,
    }

    Ok(())
}
