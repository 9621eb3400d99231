use std::collections::{ BTreeMap, HashMap, HashSet };

use log::{ debug, info };

use crate::implementations::profiles::profile_for;
use crate::implementations::text::{ drop_last_word, last_word, line_syllables, rhyme_key, tokenize };
use crate::models::analysis::{ AnalysisOptions, AnalysisReport };
use crate::models::common::{ Language, Sentiment };
use crate::traits::language_profile::LanguageProfile;
use crate::traits::poem_analyzer::PoemAnalyzer;

// Score weights; they sum to 100.
const METER_WEIGHT: f64 = 40.0;
const RHYME_WEIGHT: f64 = 25.0;
const VARIETY_WEIGHT: f64 = 20.0;
const EVENNESS_WEIGHT: f64 = 15.0;

/// Standard deviation at which line lengths count as fully uneven
const STDEV_CEILING: f64 = 6.0;

const LOW_METER_FIT: f64 = 0.5;
const LOW_RHYME_DENSITY: f64 = 0.3;
const LOW_VARIETY: f64 = 0.35;

/// Analyzer built on syllable, rhyme, vocabulary and polarity heuristics
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    options: AnalysisOptions,
}

impl HeuristicAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }
}

impl PoemAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str, language: Language) -> AnalysisReport {
        let profile = profile_for(language);
        let lines: Vec<String> = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            debug!("Nothing to analyze; returning the empty report");
            return AnalysisReport::default();
        }

        let syllables: Vec<usize> = lines
            .iter()
            .map(|l| line_syllables(l, profile))
            .collect();
        let count = syllables.len() as f64;
        let average = syllables.iter().sum::<usize>() as f64 / count;
        let stdev = (
            syllables
                .iter()
                .map(|&s| (s as f64 - average).powi(2))
                .sum::<f64>() / count
        ).sqrt();

        let target = self.options.target_syllables();
        let meter_fit = syllables.iter().filter(|&&s| target.contains(&s)).count() as f64 / count;
        let rhyme = rhyme_density(&lines, profile);
        let variety = vocabulary_variety(text, profile);
        let sentiment = classify_sentiment(text, profile);

        let raw =
            METER_WEIGHT * meter_fit +
            RHYME_WEIGHT * rhyme +
            VARIETY_WEIGHT * variety +
            EVENNESS_WEIGHT * (1.0 - (stdev / STDEV_CEILING).min(1.0));
        let score = raw.round().clamp(0.0, 100.0) as u8;

        info!(
            "Analyzed {} lines: score {}, meter fit {:.2}, rhyme {:.2}, variety {:.2}, {}",
            lines.len(),
            score,
            meter_fit,
            rhyme,
            variety,
            sentiment
        );

        let notes = notes_for(language, meter_fit, rhyme, variety);
        let suggestions = self.suggestions_for(language, &lines, &syllables);

        AnalysisReport {
            score,
            syllable_distribution: syllables.iter().copied().enumerate().collect::<BTreeMap<_, _>>(),
            lines,
            average_syllables: average,
            syllable_stdev: stdev,
            meter_fit,
            rhyme_density: rhyme,
            vocabulary_variety: variety,
            sentiment,
            notes,
            suggestions,
        }
    }

    fn sentiment(&self, text: &str, language: Language) -> Sentiment {
        classify_sentiment(text, profile_for(language))
    }
}

impl HeuristicAnalyzer {
    /// Point at the line farthest from the target midpoint, if it is
    /// outside the target range.
    fn suggestions_for(&self, language: Language, lines: &[String], syllables: &[usize]) -> Vec<String> {
        let midpoint = self.options.target_midpoint();
        let worst = syllables
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (i, &s)| {
                let distance = s.abs_diff(midpoint);
                match best {
                    Some((_, d)) if d >= distance => best,
                    _ => Some((i, distance)),
                }
            });

        let Some((index, _)) = worst else {
            return Vec::new();
        };
        let (Some(line), Some(&count)) = (lines.get(index), syllables.get(index)) else {
            return Vec::new();
        };
        let target = self.options.target_syllables();
        let number = index + 1;

        if count > *target.end() {
            let shorter = drop_last_word(&tokenize(line).join(" "));
            vec![match language {
                Language::English => format!(
                    "Try shortening line {} by removing a filler word, e.g., '{}' → '{}'.",
                    number,
                    line.trim(),
                    shorter
                ),
                Language::Romanian => format!(
                    "Încearcă să scurtezi versul {} eliminând un cuvânt de umplutură, ex.: '{}' → '{}'.",
                    number,
                    line.trim(),
                    shorter
                ),
            }]
        } else if count < *target.start() {
            let missing = target.start() - count;
            vec![match language {
                Language::English => format!(
                    "Line {} is short ({} syllables); add an image or a modifier worth about {} more.",
                    number,
                    count,
                    missing
                ),
                Language::Romanian => format!(
                    "Versul {} e scurt ({} silabe); adaugă o imagine sau un epitet de încă {} silabe.",
                    number,
                    count,
                    missing
                ),
            }]
        } else {
            Vec::new()
        }
    }
}

/// Share of lines whose ending rhymes with at least one other line.
/// Lines without words never rhyme.
pub fn rhyme_density(lines: &[String], profile: &dyn LanguageProfile) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }

    let keys: Vec<String> = lines
        .iter()
        .map(|l| rhyme_key(&last_word(l), profile))
        .collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in keys.iter().filter(|k| !k.is_empty()) {
        *counts.entry(key.as_str()).or_default() += 1;
    }

    let paired: usize = counts.values().filter(|&&c| c > 1).sum();
    paired as f64 / lines.len() as f64
}

/// Unique content words over all content words; 0 without content words
pub fn vocabulary_variety(text: &str, profile: &dyn LanguageProfile) -> f64 {
    let content: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|w| !profile.is_stopword(w))
        .collect();
    if content.is_empty() {
        return 0.0;
    }

    let unique: HashSet<&String> = content.iter().collect();
    unique.len() as f64 / content.len() as f64
}

/// Polarity from distinct positive words minus distinct negative words
pub fn classify_sentiment(text: &str, profile: &dyn LanguageProfile) -> Sentiment {
    let words: HashSet<String> = tokenize(text).into_iter().collect();
    let positive = profile.positive_words().iter().filter(|w| words.contains(**w)).count();
    let negative = profile.negative_words().iter().filter(|w| words.contains(**w)).count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn notes_for(language: Language, meter_fit: f64, rhyme: f64, variety: f64) -> Vec<String> {
    let mut notes = Vec::new();
    if meter_fit < LOW_METER_FIT {
        notes.push(match language {
            Language::English => "Many lines fall outside the target syllable range.",
            Language::Romanian => "Multe versuri ies din intervalul de silabe țintă.",
        });
    }
    if rhyme < LOW_RHYME_DENSITY {
        notes.push(match language {
            Language::English => "Rhyme density is low; consider rhymed endings.",
            Language::Romanian => "Rima e rară; poți adăuga rime la final de vers.",
        });
    }
    if variety < LOW_VARIETY {
        notes.push(match language {
            Language::English => "Repetitive vocabulary; try fresh images or more precise verbs.",
            Language::Romanian => "Vocabular repetitiv; încearcă metafore sau verbe mai precise.",
        });
    }
    notes.into_iter().map(str::to_string).collect()
}
