use anyhow::Result;

use poeme_assistant::{ Language, PoemAssistant };

use crate::cli::{ ui, OutputFormat };

/// Theme suggestion command
pub fn execute<A: PoemAssistant>(assistant: &A, language: Language, format: OutputFormat) -> Result<()> {
    let theme = assistant.suggest_theme(language);

    match format {
        OutputFormat::Text => {
            let (prompt_label, keywords_label) = match language {
                Language::English => ("Theme", "Keywords"),
                Language::Romanian => ("Temă", "Cuvinte-cheie"),
            };
            ui::print_result(prompt_label, &theme.prompt);
            ui::print_result(keywords_label, &theme.keywords.join(", "));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&theme)?),
    }

    Ok(())
}
