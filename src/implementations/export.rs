use std::fs;
use std::path::Path;

use chrono::{ DateTime, TimeZone };
use log::info;

use crate::errors::{ AssistantError, AssistantResult };
use crate::models::analysis::AnalysisReport;
use crate::models::common::Language;
use crate::models::poem::PoemResult;

/// Plain-text rendering of a generated poem, with a language header
pub fn render_poem(poem: &PoemResult) -> String {
    let header = match poem.language {
        Language::English => "— Generated Poem (EN) —",
        Language::Romanian => "— Poezie generată (RO) —",
    };
    format!("{}\n\n{}", header, poem.text())
}

/// Plain-text rendering of an analysis report
pub fn render_report(report: &AnalysisReport, language: Language) -> String {
    if report.is_empty() {
        return match language {
            Language::English => "No lines to analyze.".to_string(),
            Language::Romanian => "Nu există versuri de analizat.".to_string(),
        };
    }

    let label = match language {
        Language::English => "Analysis (EN)",
        Language::Romanian => "Evaluare (RO)",
    };

    let table: Vec<String> = report.lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!("{:>2}. [{}] {}", i + 1, report.syllables(i).unwrap_or_default(), line)
        })
        .collect();

    let stats = format!(
        "Score: {}/100\n\
         Avg syllables: {:.2} | σ={:.2} | meter_fit={:.2}\n\
         Rhyme density: {:.2} | Vocab variety: {:.2} | Sentiment: {}",
        report.score,
        report.average_syllables,
        report.syllable_stdev,
        report.meter_fit,
        report.rhyme_density,
        report.vocabulary_variety,
        report.sentiment
    );

    let notes = if report.notes.is_empty() {
        match language {
            Language::English => "Well balanced.".to_string(),
            Language::Romanian => "Bine echilibrată.".to_string(),
        }
    } else {
        report.notes.iter().map(|n| format!("- {}", n)).collect::<Vec<_>>().join("\n")
    };

    let mut out = format!("— {} —\n\n{}\n\n{}\n\n{}", label, table.join("\n"), stats, notes);
    if !report.suggestions.is_empty() {
        let heading = match language {
            Language::English => "Suggestions:",
            Language::Romanian => "Sugestii:",
        };
        out.push_str(&format!("\n\n{}\n", heading));
        out.push_str(
            &report.suggestions.iter().map(|s| format!("• {}", s)).collect::<Vec<_>>().join("\n")
        );
    }
    out
}

/// Default export file name stamped with `now`
pub fn default_export_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("poeme_assistant_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write `content` to `path`; blank content is refused
pub fn save_text(path: &Path, content: &str) -> AssistantResult<()> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AssistantError::InvalidInput("nothing to save".to_string()));
    }

    fs::write(path, content)?;
    info!("Saved {} bytes to {}", content.len(), path.display());
    Ok(())
}
