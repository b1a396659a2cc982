// src/main.rs
use anyhow::Context;
use clap::{Parser, Subcommand};
use project_tree::db::open_read_only;
use project_tree::mainbot::UserSummary;
use project_tree::{ProjectTree, TreeError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT_FILE: &str = "project_tree.txt";

#[derive(Parser)]
#[command(name = "project-tree")]
#[command(about = "Prints a project's directory tree and inspects mainbot records.")]
struct CommandLine {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the directory tree, print it and save it to a file
    #[command(alias = "t")]
    Tree {
        /// Root directory to render
        #[arg(default_value = ".")]
        root: PathBuf,
        /// File the tree is saved to; it is left out of the tree itself
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
        /// Only print the tree, do not save it
        #[arg(long)]
        no_save: bool,
        /// Ignore pattern (exact name or `*suffix`); replaces the built-in list
        #[arg(short, long = "ignore", value_name = "PATTERN")]
        ignore: Vec<String>,
    },
    /// Show a read-only summary of one mainbot user
    #[command(alias = "u")]
    User {
        /// Path to the mainbot SQLite database
        #[arg(long, env = "MAINBOT_DB")]
        db: PathBuf,
        user_id: i64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_tree(root: PathBuf, output: Option<PathBuf>, ignore: Vec<String>) -> anyhow::Result<ExitCode> {
    let custom = if ignore.is_empty() { None } else { Some(ignore.as_slice()) };
    let generator = ProjectTree::new(&root, custom);
    match generator.generate_tree(output.as_deref()) {
        Ok(tree) => {
            println!("{}", tree);
            Ok(ExitCode::SUCCESS)
        }
        // Still show what was rendered; only saving failed.
        Err(e @ TreeError::Write { .. }) => {
            if let Some(tree) = e.tree() {
                println!("{}", tree);
            }
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_user(db: PathBuf, user_id: i64, json: bool) -> anyhow::Result<ExitCode> {
    let conn = open_read_only(&db)?;
    let summary = UserSummary::load(&conn, user_id)
        .with_context(|| format!("Failed to load user {} from {}", user_id, db.display()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render(chrono::Utc::now()));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = CommandLine::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tree { root, output, no_save, ignore } => {
            let output = if no_save { None } else { Some(output) };
            run_tree(root, output, ignore)
        }
        Commands::User { db, user_id, json } => run_user(db, user_id, json),
    }
}
