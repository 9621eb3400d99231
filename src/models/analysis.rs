use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{ Deserialize, Serialize };

use crate::models::common::Sentiment;

/// Result of analyzing a poem
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Weighted overall score, 0 to 100
    pub score: u8,
    /// Non-blank lines of the input, in order
    pub lines: Vec<String>,
    /// Line index to estimated syllable count
    pub syllable_distribution: BTreeMap<usize, usize>,
    pub average_syllables: f64,
    pub syllable_stdev: f64,
    /// Share of lines inside the target syllable range
    pub meter_fit: f64,
    /// Share of lines whose ending rhymes with another line
    pub rhyme_density: f64,
    /// Unique content words over all content words
    pub vocabulary_variety: f64,
    pub sentiment: Sentiment,
    /// Diagnostics about weak areas of the poem
    pub notes: Vec<String>,
    /// Concrete edits worth trying
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Syllable count of line `index`, if the line exists
    pub fn syllables(&self, index: usize) -> Option<usize> {
        self.syllable_distribution.get(&index).copied()
    }
}

/// Tunables for poem analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub min_syllables: usize,
    pub max_syllables: usize,
}

impl AnalysisOptions {
    pub fn with_target(min: usize, max: usize) -> Self {
        Self { min_syllables: min, max_syllables: max }
    }

    /// Inclusive target range; a reversed pair is read in order
    pub fn target_syllables(&self) -> RangeInclusive<usize> {
        let lo = self.min_syllables.min(self.max_syllables);
        let hi = self.min_syllables.max(self.max_syllables);
        lo..=hi
    }

    /// Midpoint of the target range, rounded down
    pub fn target_midpoint(&self) -> usize {
        (self.min_syllables + self.max_syllables) / 2
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::with_target(8, 10)
    }
}
