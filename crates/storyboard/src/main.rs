//! Storyboard CLI binary.
//!
//! - Generate a scene script from an idea and a desired duration
//! - Inspect how a duration string is understood

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, show_duration};

    // Load .env before clap reads API keys from the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            if !run_generate(args).await? {
                std::process::exit(1);
            }
        }

        Commands::Duration { text } => {
            show_duration(&text);
        }
    }

    Ok(())
}
