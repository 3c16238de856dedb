//! DigQuest CLI - inspect and maintain the client cache
//!
//! Plays the role the app UI plays in production: it feeds server snapshots
//! into the reconciler, applies user actions to the cache, and shrinks images
//! before upload.

use clap::Parser;
use digquest_sync::media::OptimizeOptions;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use cli::{Cli, Commands};
use error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cache_path = cli.cache_path.as_deref();

    match cli.command {
        Commands::List { kind, json } => commands::list::run_list(kind, json, cache_path),
        Commands::Add { kind, input } => commands::add::run_add(kind, input.as_deref(), cache_path),
        Commands::Remove { kind, id } => commands::remove::run_remove(kind, id, cache_path),
        Commands::Clear { kind } => commands::clear::run_clear(kind, cache_path),
        Commands::Reconcile { kind, input, json } => {
            commands::reconcile::run_reconcile(kind, input.as_deref(), json, cache_path)
        }
        Commands::Optimize {
            input,
            output,
            max_width,
            max_height,
            quality,
            max_bytes,
        } => {
            let options = OptimizeOptions {
                max_width,
                max_height,
                quality,
                max_output_bytes: max_bytes,
            };
            commands::optimize::run_optimize(&input, &output, &options)
        }
        Commands::Completions { shell, output } => {
            commands::completions::run_completions(shell, output.as_deref())
        }
    }
}
