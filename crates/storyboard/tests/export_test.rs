use std::cell::RefCell;
use storyboard::{
    DirectoryExporter, PROMPTS_FILE_NAME, SCRIPT_FILE_NAME, copy_scene, copy_text,
    export_documents, prompts_document, script_document,
};
use storyboard_core::Scene;
use storyboard_error::StoryboardResult;
use storyboard_interface::Exporter;

mod test_utils;

fn scenes() -> Vec<Scene> {
    vec![
        Scene::new(1, "Kong thức dậy", "Wide shot of a giant ape waking"),
        Scene::new(2, "Kong leo núi", "Low angle, ape climbing a cliff"),
    ]
}

#[derive(Default)]
struct RecordingExporter {
    files: RefCell<Vec<(String, String)>>,
    copied: RefCell<Vec<String>>,
}

impl Exporter for RecordingExporter {
    fn export_text(&self, filename: &str, content: &str) -> StoryboardResult<()> {
        self.files
            .borrow_mut()
            .push((filename.to_string(), content.to_string()));
        Ok(())
    }

    fn copy_text(&self, content: &str) -> StoryboardResult<()> {
        self.copied.borrow_mut().push(content.to_string());
        Ok(())
    }
}

#[test]
fn prompts_document_maps_scene_keys_in_order() -> anyhow::Result<()> {
    let document = prompts_document(&scenes())?;

    assert_eq!(
        document,
        "{\n  \"scene_1\": \"Wide shot of a giant ape waking\",\n  \"scene_2\": \"Low angle, ape climbing a cliff\"\n}"
    );
    Ok(())
}

#[test]
fn prompts_document_keeps_structured_prompts_as_objects() -> anyhow::Result<()> {
    let scene: Scene = serde_json::from_value(test_utils::structured_scene(4))?;
    let document: serde_json::Value = serde_json::from_str(&prompts_document(&[scene])?)?;

    assert_eq!(document["scene_4"]["Persona"]["Role"], "Director");
    Ok(())
}

#[test]
fn script_document_is_the_full_scene_array() -> anyhow::Result<()> {
    let document = script_document(&scenes())?;
    let parsed: serde_json::Value = serde_json::from_str(&document)?;

    assert!(document.starts_with("[\n  {\n    \"scene\": 1,"));
    assert_eq!(parsed[1]["description"], "Kong leo núi");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn empty_script_exports_empty_documents() -> anyhow::Result<()> {
    assert_eq!(prompts_document(&[])?, "{}");
    assert_eq!(script_document(&[])?, "[]");
    Ok(())
}

#[test]
fn copy_text_renders_both_prompt_shapes() -> anyhow::Result<()> {
    assert_eq!(copy_text(&scenes()[0]), "Wide shot of a giant ape waking");

    let scene: Scene = serde_json::from_value(test_utils::structured_scene(1))?;
    let text = copy_text(&scene);
    assert!(text.contains("\"Objective\": \"Generate a cinematic 8-second clip\""));
    Ok(())
}

#[test]
fn export_documents_uses_default_file_names() -> anyhow::Result<()> {
    let exporter = RecordingExporter::default();
    export_documents(&exporter, &scenes())?;

    let files = exporter.files.borrow();
    let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec![PROMPTS_FILE_NAME, SCRIPT_FILE_NAME]);
    Ok(())
}

#[test]
fn copy_scene_hands_prompt_to_exporter() -> anyhow::Result<()> {
    let exporter = RecordingExporter::default();
    copy_scene(&exporter, &scenes()[1])?;

    assert_eq!(
        exporter.copied.borrow().as_slice(),
        ["Low angle, ape climbing a cliff".to_string()]
    );
    Ok(())
}

#[test]
fn directory_exporter_writes_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("nested/out");
    let exporter = DirectoryExporter::new(&target);

    export_documents(&exporter, &scenes())?;

    let prompts = std::fs::read_to_string(target.join("generated_prompts.json"))?;
    let script = std::fs::read_to_string(target.join("generated_script.json"))?;
    assert!(prompts.contains("scene_2"));
    assert!(script.contains("Kong thức dậy"));
    Ok(())
}

#[test]
fn directory_exporter_reports_unwritable_target() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a directory")?;

    let exporter = DirectoryExporter::new(&blocker);
    let err = exporter.export_text("x.json", "{}").unwrap_err();

    assert!(err.to_string().contains("Export Error"));
    Ok(())
}
