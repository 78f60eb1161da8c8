//! Generation command handler.

use super::GenerateArgs;
use storyboard::{
    DirectoryExporter, Generator, StoryboardResult, copy_scene, export_documents,
};
use storyboard_core::{Credentials, PromptContent, Scene};
use storyboard_models::StoryboardConfig;
use tracing::{info, warn};

/// Runs one generation and presents its outcome.
///
/// Returns `false` when the generation failed; the normalized message has then
/// already been printed to stderr.
pub async fn run_generate(args: GenerateArgs) -> StoryboardResult<bool> {
    let config = match &args.config {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };

    let generator = Generator::from_config(&config);
    let credentials = Credentials::new(args.gemini_key.clone(), args.openai_key.clone());

    info!(provider = %args.provider, "Generating script");

    let scenes = match generator
        .run(&args.idea, &args.duration, args.provider, &credentials)
        .await
    {
        Ok(scenes) => scenes,
        Err(e) => {
            eprintln!("{}", e.message());
            return Ok(false);
        }
    };

    for scene in &scenes {
        print_scene(scene);
    }

    let exporter = DirectoryExporter::new(args.out.clone().unwrap_or_else(|| ".".into()));

    if args.out.is_some() {
        export_documents(&exporter, &scenes)?;
    }

    if let Some(number) = args.copy {
        match scenes.iter().find(|scene| *scene.index() == number) {
            Some(scene) => copy_scene(&exporter, scene)?,
            None => warn!(scene = number, "No such scene to copy"),
        }
    }

    Ok(true)
}

fn print_scene(scene: &Scene) {
    println!("Cảnh {}", scene.index());
    println!("  {}", scene.description());
    match scene.prompt() {
        PromptContent::Plain(text) => println!("  Prompt: {}", text),
        prompt @ PromptContent::Structured(_) => {
            println!("  Prompt:");
            for line in prompt.to_text().lines() {
                println!("    {}", line);
            }
        }
    }
    println!();
}
