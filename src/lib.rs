pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ AssistantConfig, ConfigError, GenerationDefaults };
pub use errors::{ AssistantError, AssistantResult };
pub use implementations::analyzer::HeuristicAnalyzer;
pub use implementations::assistant::{ suggest_theme, DefaultAssistant };
pub use implementations::generator::CorpusPoemGenerator;
pub use models::{
    analysis::{ AnalysisOptions, AnalysisReport },
    common::{ GenerationMode, Language, RhymeScheme, Sentiment },
    poem::{ PoemRequest, PoemRequestBuilder, PoemResult },
    theme::Theme,
};
pub use traits::{ LanguageProfile, PoemAnalyzer, PoemAssistant, PoemGenerator };
