use log::{ debug, info };
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{ Rng, SeedableRng };

use crate::config::AssistantConfig;
use crate::implementations::analyzer::HeuristicAnalyzer;
use crate::implementations::generator::CorpusPoemGenerator;
use crate::implementations::profiles::profile_for;
use crate::implementations::text::tokenize;
use crate::models::analysis::AnalysisReport;
use crate::models::common::Language;
use crate::models::poem::{ PoemRequest, PoemResult };
use crate::models::theme::Theme;
use crate::traits::assistant::PoemAssistant;
use crate::traits::poem_analyzer::PoemAnalyzer;
use crate::traits::poem_generator::PoemGenerator;

/// Number of keywords derived from a theme
const THEME_KEYWORDS: usize = 3;

/// Pick a theme for `language` and derive keywords from its longer words
pub fn suggest_theme<R: Rng + ?Sized>(language: Language, rng: &mut R) -> Theme {
    let prompt = profile_for(language)
        .themes()
        .choose(rng)
        .map(|t| t.to_string())
        .unwrap_or_default();

    let keywords = tokenize(&prompt)
        .into_iter()
        .filter(|w| w.chars().count() > 3)
        .take(THEME_KEYWORDS)
        .collect();

    Theme { language, prompt, keywords }
}

/// Assistant wiring the corpus generator and the heuristic analyzer
#[derive(Debug, Clone, Default)]
pub struct DefaultAssistant {
    generator: CorpusPoemGenerator,
    analyzer: HeuristicAnalyzer,
    seed: Option<u64>,
}

impl DefaultAssistant {
    pub fn new(config: &AssistantConfig) -> Self {
        debug!(
            "Creating assistant with target syllables {:?}",
            config.analysis.target_syllables()
        );
        Self {
            generator: CorpusPoemGenerator::new(),
            analyzer: HeuristicAnalyzer::new(config.analysis.clone()),
            seed: config.generation.seed,
        }
    }

    pub fn analyzer(&self) -> &HeuristicAnalyzer {
        &self.analyzer
    }
}

impl PoemAssistant for DefaultAssistant {
    fn generate_poem(&self, request: &PoemRequest) -> PoemResult {
        self.generator.generate(request)
    }

    fn analyze_poem(&self, text: &str, language: Language) -> AnalysisReport {
        self.analyzer.analyze(text, language)
    }

    fn suggest_theme(&self, language: Language) -> Theme {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let theme = suggest_theme(language, &mut rng);
        info!("Suggested theme '{}' with keywords {:?}", theme.prompt, theme.keywords);
        theme
    }
}
