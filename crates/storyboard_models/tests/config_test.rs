use std::io::Write;
use storyboard_core::{PromptStyle, ProviderChoice};
use storyboard_models::{GeminiClient, OpenAIClient, StoryboardConfig};
use storyboard_interface::SceneProvider;

#[test]
fn bundled_defaults_cover_both_providers() -> anyhow::Result<()> {
    let config = StoryboardConfig::bundled()?;

    let gemini = config.settings(ProviderChoice::Gemini);
    assert_eq!(gemini.model, "gemini-2.5-flash");
    assert_eq!(gemini.prompt_style, PromptStyle::Plain);

    let openai = config.settings(ProviderChoice::OpenAI);
    assert_eq!(openai.endpoint, "https://api.openai.com/v1/chat/completions");
    assert_eq!(openai.prompt_style, PromptStyle::Structured);
    Ok(())
}

#[test]
fn file_overrides_layer_over_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        "[providers.gemini]\nmodel = \"gemini-2.5-pro\"\nprompt_style = \"structured\""
    )?;

    let config = StoryboardConfig::from_file(file.path())?;
    let gemini = config.settings(ProviderChoice::Gemini);

    assert_eq!(gemini.model, "gemini-2.5-pro");
    assert_eq!(gemini.prompt_style, PromptStyle::Structured);
    assert_eq!(
        gemini.endpoint,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.settings(ProviderChoice::OpenAI).model, "gpt-4o-mini");
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let result = StoryboardConfig::from_file("/nonexistent/storyboard.toml");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn clients_pick_up_settings() -> anyhow::Result<()> {
    let config = StoryboardConfig::bundled()?;

    let gemini = GeminiClient::from_settings(config.settings(ProviderChoice::Gemini));
    let openai = OpenAIClient::from_settings(config.settings(ProviderChoice::OpenAI));

    assert_eq!(gemini.model_name(), "gemini-2.5-flash");
    assert_eq!(openai.model_name(), "gpt-4o-mini");
    Ok(())
}
