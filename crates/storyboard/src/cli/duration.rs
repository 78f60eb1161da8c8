//! Duration inspection command handler.

use storyboard_core::{DurationSpec, SECONDS_PER_SCENE};

/// Prints how `text` is understood as a duration.
pub fn show_duration(text: &str) {
    let spec = DurationSpec::parse(text);

    match (spec.total_seconds(), spec.required_scene_count()) {
        (Some(seconds), Some(count)) => {
            println!("Input:   {:?}", spec.raw());
            println!("Seconds: {}", seconds);
            println!("Scenes:  {} ({}s each)", count, SECONDS_PER_SCENE);
        }
        _ => {
            println!("Input:   {:?}", spec.raw());
            println!("Unspecified: the provider picks a default-length story");
        }
    }
}
