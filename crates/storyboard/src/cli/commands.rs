//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyboard_core::ProviderChoice;

/// Storyboard - scene-by-scene video scripts from a single idea
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn a content idea into a scene-by-scene video script", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a script from an idea
    Generate(GenerateArgs),

    /// Show how a duration string is parsed
    Duration {
        /// Duration text, e.g. "1 phút 30 giây"
        text: String,
    },
}

/// Arguments of `storyboard generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Content idea or story outline
    #[arg(long)]
    pub idea: String,

    /// Desired video duration, e.g. "2 phút" or "90s"
    #[arg(long, default_value = "")]
    pub duration: String,

    /// Provider to generate with
    #[arg(long, default_value = "gemini")]
    pub provider: ProviderChoice,

    /// Configuration file (defaults to ./storyboard.toml, then ~/.config/storyboard/)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to write generated_prompts.json and generated_script.json into
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the prompt of this scene number for copying
    #[arg(long)]
    pub copy: Option<u32>,

    /// Google Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_key: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_key: Option<String>,
}
