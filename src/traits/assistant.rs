use crate::models::analysis::AnalysisReport;
use crate::models::common::Language;
use crate::models::poem::{ PoemRequest, PoemResult };
use crate::models::theme::Theme;

/// The operations a front end can invoke, bundled behind one seam
pub trait PoemAssistant {
    /// Generate a poem from a request
    fn generate_poem(&self, request: &PoemRequest) -> PoemResult;

    /// Analyze a poem written in `language`
    fn analyze_poem(&self, text: &str, language: Language) -> AnalysisReport;

    /// Suggest a writing theme and a few keywords for it
    fn suggest_theme(&self, language: Language) -> Theme;
}
