use anyhow::{ Context, Result };
use log::info;

use poeme_assistant::implementations::export::render_poem;
use poeme_assistant::{
    AssistantConfig,
    GenerationMode,
    Language,
    PoemAssistant,
    PoemRequest,
    RhymeScheme,
};

use crate::cli::commands::{ write_output, Destination };
use crate::cli::{ parse_keywords, ui, OutputFormat };

/// Command-line choices for one generation run; `None` means "use config"
#[derive(Debug, Default)]
pub struct GenerateArgs<'a> {
    pub topic: Option<&'a str>,
    pub keywords: Option<&'a str>,
    pub scheme: Option<&'a str>,
    pub stanzas: Option<usize>,
    pub lines: Option<usize>,
    pub mode: Option<&'a str>,
    pub no_fit: bool,
    pub seed: Option<u64>,
}

/// Merge command-line choices over configured defaults
pub fn build_request(
    config: &AssistantConfig,
    language: Language,
    args: &GenerateArgs<'_>
) -> Result<PoemRequest> {
    let defaults = &config.generation;

    let scheme = match args.scheme {
        Some(s) => s.parse::<RhymeScheme>().context("Invalid --scheme")?,
        None => defaults.rhyme_scheme.clone(),
    };
    let mode = match args.mode {
        Some(m) => m.parse::<GenerationMode>().context("Invalid --mode")?,
        None => defaults.mode,
    };
    let target = if defaults.fit_meter && !args.no_fit {
        Some(config.analysis.target_syllables())
    } else {
        None
    };

    Ok(
        PoemRequest::builder(language)
            .topic(args.topic.unwrap_or_default())
            .keywords(args.keywords.map(parse_keywords).unwrap_or_default())
            .rhyme_scheme(scheme)
            .stanzas(args.stanzas.unwrap_or(defaults.stanzas))
            .lines_per_stanza(args.lines.unwrap_or(defaults.lines_per_stanza))
            .mode(mode)
            .target_syllables(target)
            .seed(args.seed.or(defaults.seed))
            .build()
    )
}

/// Poem generation command; returns the content that was printed
pub fn execute<A: PoemAssistant>(
    assistant: &A,
    request: &PoemRequest,
    format: OutputFormat,
    destination: &Destination<'_>
) -> Result<String> {
    if request.keywords.is_empty() && request.topic.trim().is_empty() {
        ui::print_warning(match request.language {
            Language::English => "No keywords or topic given; the poem will wander.",
            Language::Romanian => "Nu ai dat cuvinte-cheie sau temă; poezia va hoinări.",
        });
    }

    let poem = assistant.generate_poem(request);
    info!("Generated {} lines", poem.line_count());

    let content = match format {
        OutputFormat::Text => {
            let rendered = render_poem(&poem);
            ui::print_text(&rendered);
            rendered
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&poem)?;
            println!("{}", json);
            json
        }
    };

    write_output(destination, &content)?;
    Ok(content)
}
