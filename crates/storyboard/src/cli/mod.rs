//! Command-line interface module.

mod commands;
mod duration;
mod generate;

pub use commands::{Cli, Commands, GenerateArgs};
pub use duration::show_duration;
pub use generate::run_generate;
