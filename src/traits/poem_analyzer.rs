use crate::models::analysis::AnalysisReport;
use crate::models::common::{ Language, Sentiment };

/// Trait for scoring a poem
pub trait PoemAnalyzer {
    /// Analyze `text`; identical input always gives an identical report
    fn analyze(&self, text: &str, language: Language) -> AnalysisReport;

    /// Classify the tone of `text` without running the full analysis
    fn sentiment(&self, text: &str, language: Language) -> Sentiment;
}
