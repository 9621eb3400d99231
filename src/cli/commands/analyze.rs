use anyhow::{ anyhow, Result };
use log::{ debug, info };
use std::fs;
use std::io::{ IsTerminal, Read };
use std::path::Path;

use poeme_assistant::implementations::export::render_report;
use poeme_assistant::{ Language, PoemAssistant };

use crate::cli::commands::{ write_output, Destination };
use crate::cli::{ ui, OutputFormat };

/// Poem text from a file, an inline argument or standard input
pub fn load_poem(file: Option<&Path>, inline: Option<&str>) -> Result<String> {
    if let Some(path) = file {
        debug!("Reading poem from {}", path.display());
        return fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read poem file {}: {}", path.display(), e));
    }
    if let Some(text) = inline {
        return Ok(text.replace("\\n", "\n"));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        ui::print_info("Reading poem from standard input (Ctrl-D to finish)...");
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Poem analysis command
pub fn execute<A: PoemAssistant>(
    assistant: &A,
    poem: &str,
    language: Language,
    format: OutputFormat,
    destination: &Destination<'_>
) -> Result<()> {
    if poem.trim().is_empty() {
        ui::print_warning(match language {
            Language::English => "Write your poem first.",
            Language::Romanian => "Scrie mai întâi poezia.",
        });
        return Ok(());
    }

    let report = assistant.analyze_poem(poem, language);
    info!("Analysis finished with score {}", report.score);

    let content = match format {
        OutputFormat::Text => {
            let rendered = render_report(&report, language);
            ui::print_header(match language {
                Language::English => "Poem Analysis",
                Language::Romanian => "Analiza poeziei",
            });
            ui::print_text(&rendered);
            println!();
            ui::print_score(report.score);
            ui::print_sentiment(report.sentiment);
            rendered
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
            json
        }
    };

    write_output(destination, &content)
}
