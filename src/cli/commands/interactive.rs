use anyhow::Result;
use log::debug;

use poeme_assistant::{ AssistantConfig, Language, PoemAssistant };

use crate::cli::commands::{ analyze, generate, write_output, Destination };
use crate::cli::ui::{ self, SessionAction };
use crate::cli::OutputFormat;

/// Prompt-driven session mirroring the generate / analyze / theme commands
pub fn execute<A: PoemAssistant>(
    assistant: &A,
    config: &AssistantConfig,
    mut language: Language
) -> Result<()> {
    ui::print_header("Poeme Assistant");

    // last suggested theme pre-fills the generation prompts
    let mut topic = String::new();
    let mut keywords = String::new();

    loop {
        let action = ui::select_action(language)?;
        debug!("Interactive action: {:?}", action);

        match action {
            SessionAction::Generate => {
                let (topic_prompt, keywords_prompt) = match language {
                    Language::English => ("Prompt", "Keywords (comma-separated)"),
                    Language::Romanian => ("Prompt", "Cuvinte-cheie (separate prin virgulă)"),
                };
                topic = ui::input_line(topic_prompt, &topic)?;
                keywords = ui::input_line(keywords_prompt, &keywords)?;

                let args = generate::GenerateArgs {
                    topic: Some(topic.as_str()),
                    keywords: Some(keywords.as_str()),
                    ..Default::default()
                };
                let request = generate::build_request(config, language, &args)?;
                let rendered = generate::execute(assistant, &request, OutputFormat::Text, &Destination {
                    output: None,
                    save: false,
                })?;

                if ui::confirm_action("Save to .txt?")? {
                    write_output(&Destination { output: None, save: true }, &rendered)?;
                }
            }
            SessionAction::Analyze => {
                let poem = ui::input_poem(language)?;
                analyze::execute(assistant, &poem, language, OutputFormat::Text, &Destination {
                    output: None,
                    save: false,
                })?;
            }
            SessionAction::Theme => {
                let theme = assistant.suggest_theme(language);
                ui::print_result("Theme", &theme.prompt);
                ui::print_result("Keywords", &theme.keywords.join(", "));
                topic = theme.prompt;
                keywords = theme.keywords.join(", ");
            }
            SessionAction::SwitchLanguage => {
                language = ui::select_language(language)?;
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}
