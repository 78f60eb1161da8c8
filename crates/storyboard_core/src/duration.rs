//! Free-text duration parsing.

use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Length in seconds of the video clip rendered from a single scene.
pub const SECONDS_PER_SCENE: f64 = 8.0;

static MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(phút|minute|min|m)").expect("Valid minutes regex")
});

static SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(giây|second|sec|s)").expect("Valid seconds regex")
});

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("Valid number regex"));

/// A desired video duration, as typed by the user and as understood by the parser.
///
/// `total_seconds` and `required_scene_count` are either both present or both absent.
/// Absence means "no duration constraint": the provider is free to tell a complete
/// default-length story.
///
/// # Examples
///
/// ```
/// use storyboard_core::DurationSpec;
///
/// let spec = DurationSpec::parse("1 phút 30 giây");
/// assert_eq!(*spec.total_seconds(), Some(90.0));
/// assert_eq!(*spec.required_scene_count(), Some(12));
///
/// let none = DurationSpec::parse("");
/// assert!(none.is_unspecified());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct DurationSpec {
    /// The text exactly as the user typed it
    raw: String,
    /// Recognized duration in seconds
    total_seconds: Option<f64>,
    /// Number of 8-second scenes needed to cover the duration
    required_scene_count: Option<u64>,
}

impl DurationSpec {
    /// Parses a free-text duration.
    ///
    /// The first minutes quantity and the first seconds quantity are summed. Unit
    /// tokens are matched case-insensitively in Vietnamese ("phút", "giây") and
    /// English ("minute"/"min"/"m", "second"/"sec"/"s"). When no unit matches and
    /// the trimmed input is a plain number, the number is taken as seconds.
    ///
    /// Blank input, totals that are not positive, and totals too large to count in
    /// scenes yield an unspecified duration.
    pub fn parse(input: impl Into<String>) -> Self {
        let raw = input.into();
        let counted = Self::total_seconds_of(&raw)
            .and_then(|seconds| scene_count(seconds).map(|scenes| (seconds, scenes)));

        match counted {
            Some((seconds, scenes)) => {
                debug!(raw = %raw, seconds, scenes, "Parsed duration");
                Self {
                    raw,
                    total_seconds: Some(seconds),
                    required_scene_count: Some(scenes),
                }
            }
            None => {
                debug!(raw = %raw, "No duration constraint recognized");
                Self {
                    raw,
                    total_seconds: None,
                    required_scene_count: None,
                }
            }
        }
    }

    /// Returns true when no duration constraint was recognized.
    pub fn is_unspecified(&self) -> bool {
        self.total_seconds.is_none()
    }

    fn total_seconds_of(raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut total = 0.0;
        if let Some(minutes) = first_quantity(&MINUTES, raw) {
            total += minutes * 60.0;
        }
        if let Some(seconds) = first_quantity(&SECONDS, raw) {
            total += seconds;
        }

        if total == 0.0 && BARE_NUMBER.is_match(trimmed) {
            total = trimmed.parse().unwrap_or(0.0);
        }

        (total > 0.0).then_some(total)
    }
}

impl Default for DurationSpec {
    fn default() -> Self {
        Self::parse("")
    }
}

/// Number of scenes covering `seconds`, or `None` when it does not fit a `u64`.
fn scene_count(seconds: f64) -> Option<u64> {
    let scenes = (seconds / SECONDS_PER_SCENE).ceil();
    (scenes.is_finite() && scenes < u64::MAX as f64).then_some(scenes as u64)
}

fn first_quantity(pattern: &Regex, raw: &str) -> Option<f64> {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
