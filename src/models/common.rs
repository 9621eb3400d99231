use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::errors::AssistantError;

/// Supported poem languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ro")]
    Romanian,
}

impl Language {
    /// Short language code, as used on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Romanian => "ro",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::English, Language::Romanian]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Romanian => write!(f, "Română"),
        }
    }
}

impl FromStr for Language {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ro" | "rom" | "romanian" | "romana" | "română" => Ok(Language::Romanian),
            _ => Err(AssistantError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// End-line rhyme pattern applied to every stanza
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RhymeScheme {
    #[default]
    Aabb,
    Abab,
    Abba,
    Abcb,
    Aaaa,
    /// No rhyme constraints
    Free,
    Custom(String),
}

impl RhymeScheme {
    /// The letter pattern of the scheme, uppercase
    pub fn pattern(&self) -> &str {
        match self {
            RhymeScheme::Aabb => "AABB",
            RhymeScheme::Abab => "ABAB",
            RhymeScheme::Abba => "ABBA",
            RhymeScheme::Abcb => "ABCB",
            RhymeScheme::Aaaa => "AAAA",
            RhymeScheme::Free => "",
            RhymeScheme::Custom(pattern) => pattern,
        }
    }

    /// Line indices that must rhyme with each other inside a stanza of
    /// `n_lines` lines. The pattern is repeated or truncated to fit; letters
    /// that occur only once impose nothing. Groups are ordered by the
    /// position of their first line.
    pub fn groups(&self, n_lines: usize) -> Vec<Vec<usize>> {
        let letters: Vec<char> = self.pattern().chars().collect();
        if letters.is_empty() {
            return Vec::new();
        }

        let mut groups: Vec<(char, Vec<usize>)> = Vec::new();
        for i in 0..n_lines {
            let letter = letters[i % letters.len()];
            match groups.iter_mut().find(|(l, _)| *l == letter) {
                Some((_, members)) => members.push(i),
                None => groups.push((letter, vec![i])),
            }
        }

        groups
            .into_iter()
            .map(|(_, members)| members)
            .filter(|members| members.len() > 1)
            .collect()
    }
}

impl fmt::Display for RhymeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhymeScheme::Free => write!(f, "free"),
            other => write!(f, "{}", other.pattern()),
        }
    }
}

impl FromStr for RhymeScheme {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = s.trim().to_uppercase();
        if pattern.is_empty() || pattern == "FREE" {
            return Ok(RhymeScheme::Free);
        }
        if let Some(bad) = pattern.chars().find(|c| !c.is_alphabetic()) {
            return Err(AssistantError::InvalidRhymeScheme {
                scheme: s.to_string(),
                reason: format!("'{}' is not a letter", bad),
            });
        }

        Ok(match pattern.as_str() {
            "AABB" => RhymeScheme::Aabb,
            "ABAB" => RhymeScheme::Abab,
            "ABBA" => RhymeScheme::Abba,
            "ABCB" => RhymeScheme::Abcb,
            "AAAA" => RhymeScheme::Aaaa,
            _ => RhymeScheme::Custom(pattern),
        })
    }
}

impl From<RhymeScheme> for String {
    fn from(scheme: RhymeScheme) -> Self {
        scheme.to_string()
    }
}

impl TryFrom<String> for RhymeScheme {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Coarse polarity of a text's tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// How lines are produced before rhyme enforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Walk a bigram model built from the language's seed corpus
    #[default]
    Bigram,
    /// Fill fixed line templates with keywords
    Template,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Bigram => write!(f, "bigram"),
            GenerationMode::Template => write!(f, "template"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bigram" | "markov" => Ok(GenerationMode::Bigram),
            "template" | "templates" => Ok(GenerationMode::Template),
            _ => Err(AssistantError::UnsupportedMode(s.to_string())),
        }
    }
}
