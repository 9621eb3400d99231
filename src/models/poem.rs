use std::ops::RangeInclusive;

use serde::{ Deserialize, Serialize };

use crate::models::common::{ GenerationMode, Language, RhymeScheme };

pub const DEFAULT_STANZAS: usize = 2;
pub const DEFAULT_LINES_PER_STANZA: usize = 4;

/// Everything the generator needs for one poem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemRequest {
    pub language: Language,
    /// Free-text prompt; its words stand in for keywords when none are given
    pub topic: String,
    pub keywords: Vec<String>,
    pub rhyme_scheme: RhymeScheme,
    pub stanzas: usize,
    pub lines_per_stanza: usize,
    pub mode: GenerationMode,
    /// Lines outside this range are lengthened or shortened before rhyming
    pub target_syllables: Option<RangeInclusive<usize>>,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl PoemRequest {
    pub fn builder(language: Language) -> PoemRequestBuilder {
        PoemRequestBuilder::new(language)
    }

    pub fn total_lines(&self) -> usize {
        self.stanzas * self.lines_per_stanza
    }
}

/// Builder for [`PoemRequest`]; clamps counts to at least one
#[derive(Debug, Clone)]
pub struct PoemRequestBuilder {
    request: PoemRequest,
}

impl PoemRequestBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            request: PoemRequest {
                language,
                topic: String::new(),
                keywords: Vec::new(),
                rhyme_scheme: RhymeScheme::default(),
                stanzas: DEFAULT_STANZAS,
                lines_per_stanza: DEFAULT_LINES_PER_STANZA,
                mode: GenerationMode::default(),
                target_syllables: None,
                seed: None,
            },
        }
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.request.topic = topic.into();
        self
    }

    /// Keywords are trimmed and lowercased; blank entries are dropped
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.request.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn rhyme_scheme(mut self, scheme: RhymeScheme) -> Self {
        self.request.rhyme_scheme = scheme;
        self
    }

    pub fn stanzas(mut self, stanzas: usize) -> Self {
        self.request.stanzas = stanzas.max(1);
        self
    }

    pub fn lines_per_stanza(mut self, lines: usize) -> Self {
        self.request.lines_per_stanza = lines.max(1);
        self
    }

    pub fn mode(mut self, mode: GenerationMode) -> Self {
        self.request.mode = mode;
        self
    }

    pub fn target_syllables(mut self, range: Option<RangeInclusive<usize>>) -> Self {
        self.request.target_syllables = range;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.request.seed = seed;
        self
    }

    pub fn build(self) -> PoemRequest {
        self.request
    }
}

/// A generated poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemResult {
    pub language: Language,
    pub rhyme_scheme: RhymeScheme,
    pub stanzas: Vec<Vec<String>>,
}

impl PoemResult {
    /// All lines in reading order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stanzas.iter().flatten().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(Vec::len).sum()
    }

    /// Stanzas joined by blank lines
    pub fn text(&self) -> String {
        self.stanzas
            .iter()
            .map(|stanza| stanza.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
