//! Roster CLI Entry Point
//!
//! No flags beyond the standard `--help`/`--version` and no subcommands;
//! the entire interaction is post-launch prompting.
//!
//! Exit codes: 0 on user-initiated Exit, 1 on startup connection failure or
//! any unhandled error. Logs go to stderr; stdout is reserved for tables,
//! prompts, and confirmations.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Roster - Interactive Employee Management CLI
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Interactive CLI for managing departments, roles, and employees")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let db_path = roster::config::resolve_database_path()?;
    tracing::debug!(path = %db_path.display(), "opening database");
    let store = roster::Store::open(&db_path)?;

    println!("Welcome to the Employee Management System!");
    roster::menu::run(&store)?;
    Ok(())
}
