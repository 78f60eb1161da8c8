//! Error types for the Storyboard library.
//!
//! This crate provides the error types used throughout the Storyboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Two families matter to callers of a generation:
//! - [`ProviderError`] is what an adapter raises when a provider call fails.
//! - [`GenerationError`] is the normalized, user-facing outcome of a failed generation.
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, ConfigError};
//!
//! fn load() -> StoryboardResult<String> {
//!     Err(ConfigError::new("Missing provider section"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod generation;
mod json;
mod provider;
mod validation;

pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use export::ExportError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
pub use validation::{ValidationError, ValidationErrorKind};
