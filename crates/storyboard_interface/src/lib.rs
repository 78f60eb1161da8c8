//! Trait definitions for the Storyboard script generator.
//!
//! - [`SceneProvider`] is the common interface every provider adapter implements.
//!   The orchestrator only ever talks to this trait, so adding a provider never
//!   touches orchestration code.
//! - [`Exporter`] is the caller-supplied capability for saving and copying text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Exporter, RawScenes, SceneProvider};
