use anyhow::{ anyhow, Result };
use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "poeme",
    about = "Generate and analyze short poems in English and Romanian",
    version,
    author,
    long_about = None
)]
pub struct PoemeCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (falls back to $POEME_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    /// Poem language (en, ro); defaults to the configured language
    #[arg(short = 'L', long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a poem from a topic and keywords
    Generate {
        /// Prompt whose words are used when no keywords are given
        #[arg(short, long)]
        topic: Option<String>,

        /// Comma-separated keywords
        #[arg(short, long)]
        keywords: Option<String>,

        /// Rhyme scheme (AABB, ABAB, ABBA, ABCB, AAAA, free or any letter pattern)
        #[arg(short, long)]
        scheme: Option<String>,

        /// Number of stanzas
        #[arg(long)]
        stanzas: Option<usize>,

        /// Lines per stanza
        #[arg(long)]
        lines: Option<usize>,

        /// Generation mode (bigram, template)
        #[arg(short, long)]
        mode: Option<String>,

        /// Lower bound of the target syllables per line
        #[arg(long)]
        target_min: Option<usize>,

        /// Upper bound of the target syllables per line
        #[arg(long)]
        target_max: Option<usize>,

        /// Do not lengthen or shorten lines toward the target range
        #[arg(long, default_value = "false")]
        no_fit: bool,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write the result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the result to a timestamped .txt file in the current directory
        #[arg(long, default_value = "false")]
        save: bool,
    },

    /// Analyze a poem and score it
    Analyze {
        /// Read the poem from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Poem text given inline (use \n between lines)
        #[arg(short, long)]
        text: Option<String>,

        /// Lower bound of the target syllables per line
        #[arg(long)]
        target_min: Option<usize>,

        /// Upper bound of the target syllables per line
        #[arg(long)]
        target_max: Option<usize>,

        /// Write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report to a timestamped .txt file in the current directory
        #[arg(long, default_value = "false")]
        save: bool,
    },

    /// Suggest a theme and keywords to write about
    Theme,

    /// Step through generation and analysis with prompts
    Interactive,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unsupported output format: {}", format)),
        }
    }
}

/// Split a comma-separated keyword list, dropping blanks
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
