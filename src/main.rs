use clap::{Parser, Subcommand, ValueEnum};
use orgit_export::commands::*;
use orgit_export::core::{error::Result, print_error, OutputFormat, ViewKind};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgit")]
#[command(about = "Store links to repository views and export them as public URLs")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Settings file (defaults to <config dir>/orgit/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StoreKind {
    Status,
    Log,
    Rev,
}

impl From<StoreKind> for ViewKind {
    fn from(kind: StoreKind) -> Self {
        match kind {
            StoreKind::Status => ViewKind::Status,
            StoreKind::Log => ViewKind::Log,
            StoreKind::Rev => ViewKind::Commit,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a stored link into a public URL
    Export {
        /// Stored link, e.g. "orgit-rev:/src/proj::deadbeef"
        link: String,
        /// Output format: plain, html, latex or other
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,
        /// Link description used by html and latex output
        #[arg(short, long)]
        desc: Option<String>,
    },
    /// Print the link for a view of a repository
    Store {
        /// View kind
        #[arg(value_enum)]
        kind: StoreKind,
        /// Revisions shown by the view (log and rev only)
        revisions: Vec<String>,
        /// Directory inside the repository
        #[arg(short, long, default_value = ".")]
        repo: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check that a stored link points at an existing repository and revision
    Open {
        /// Stored link
        link: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the public remote of a repository
    Remote {
        /// Directory inside the repository
        #[arg(short, long, default_value = ".")]
        repo: PathBuf,
    },
    /// Show the effective settings
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Export { link, format, desc } => {
            execute_export(&link, format, desc.as_deref(), &settings)
        }
        Commands::Store {
            kind,
            revisions,
            repo,
            json,
        } => execute_store(kind.into(), repo, revisions, json, &settings),
        Commands::Open { link, json } => execute_open(&link, json),
        Commands::Remote { repo } => execute_remote(&repo, &settings),
        Commands::Config { write } => execute_config(cli.config.as_deref(), write, &settings),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
