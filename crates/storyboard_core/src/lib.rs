//! Core data types for the Storyboard script generator.
//!
//! This crate provides the transient data model shared by every other Storyboard
//! crate, together with the two pure building blocks of a generation request:
//!
//! - [`DurationSpec::parse`] turns free-text durations ("1 phút 30 giây", "90s")
//!   into a target scene count.
//! - [`PromptBuilder`] assembles the system and user instructions sent to a provider.
//!
//! Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod duration;
mod prompt;
mod provider;
mod scene;
mod structured;

pub use duration::{DurationSpec, SECONDS_PER_SCENE};
pub use prompt::{BuiltPrompt, PromptBuilder, PromptContract, PromptStyle, ResponseEnvelope};
pub use provider::{Credentials, ProviderChoice};
pub use scene::{PromptContent, PromptShape, Scene};
pub use structured::{
    InputExample, OutputFormat, OutputStructure, Persona, StructuredPrompt,
};
