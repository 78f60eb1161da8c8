//! Export documents and the directory exporter.
//!
//! The documents are plain strings; where they end up is decided by an
//! [`Exporter`] supplied by the caller.

use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use storyboard_core::Scene;
use storyboard_error::{ExportError, JsonError, StoryboardResult};
use storyboard_interface::Exporter;
use tracing::{debug, info, instrument};

/// Default file name of the prompts-only document.
pub const PROMPTS_FILE_NAME: &str = "generated_prompts.json";

/// Default file name of the full script document.
pub const SCRIPT_FILE_NAME: &str = "generated_script.json";

/// Pretty JSON object mapping `scene_<index>` to each scene's prompt, in scene order.
///
/// # Errors
///
/// Returns an error if a prompt cannot be serialized.
pub fn prompts_document(scenes: &[Scene]) -> StoryboardResult<String> {
    let mut document = Map::new();
    for scene in scenes {
        let prompt = serde_json::to_value(scene.prompt())
            .map_err(|e| JsonError::new(format!("Failed to serialize prompt: {}", e)))?;
        document.insert(format!("scene_{}", scene.index()), prompt);
    }

    Ok(serde_json::to_string_pretty(&Value::Object(document))
        .map_err(|e| JsonError::new(format!("Failed to serialize prompts: {}", e)))?)
}

/// Pretty JSON array of the full scenes.
///
/// # Errors
///
/// Returns an error if a scene cannot be serialized.
pub fn script_document(scenes: &[Scene]) -> StoryboardResult<String> {
    Ok(serde_json::to_string_pretty(scenes)
        .map_err(|e| JsonError::new(format!("Failed to serialize script: {}", e)))?)
}

/// A scene's prompt as copyable text.
pub fn copy_text(scene: &Scene) -> String {
    scene.prompt().to_text()
}

/// Writes both documents through `exporter` under their default file names.
///
/// # Errors
///
/// Returns the first serialization or export failure.
#[instrument(skip_all, fields(scenes = scenes.len()))]
pub fn export_documents(exporter: &dyn Exporter, scenes: &[Scene]) -> StoryboardResult<()> {
    exporter.export_text(PROMPTS_FILE_NAME, &prompts_document(scenes)?)?;
    exporter.export_text(SCRIPT_FILE_NAME, &script_document(scenes)?)?;
    debug!("Exported prompts and script");
    Ok(())
}

/// Copies one scene's prompt through `exporter`.
///
/// # Errors
///
/// Returns the exporter's failure.
pub fn copy_scene(exporter: &dyn Exporter, scene: &Scene) -> StoryboardResult<()> {
    debug!(scene = scene.index(), "Copying scene prompt");
    exporter.copy_text(&copy_text(scene))
}

/// Writes exported files into a directory and emits copied text on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryExporter {
    directory: PathBuf,
}

impl DirectoryExporter {
    /// An exporter writing into `directory`, which is created on first export.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Exporter for DirectoryExporter {
    fn export_text(&self, filename: &str, content: &str) -> StoryboardResult<()> {
        let target = self.directory.join(filename);

        std::fs::create_dir_all(&self.directory).map_err(|e| {
            ExportError::new(
                self.directory.display().to_string(),
                format!("Failed to create directory: {}", e),
            )
        })?;

        std::fs::write(&target, content).map_err(|e| {
            ExportError::new(
                target.display().to_string(),
                format!("Failed to write file: {}", e),
            )
        })?;

        info!(path = %target.display(), bytes = content.len(), "Wrote export");
        Ok(())
    }

    fn copy_text(&self, content: &str) -> StoryboardResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", content)
            .map_err(|e| ExportError::new("stdout", format!("Failed to write: {}", e)))?;
        Ok(())
    }
}
