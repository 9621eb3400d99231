pub mod analysis;
pub mod common;
pub mod poem;
pub mod theme;

// Re-export common model types
pub use analysis::{ AnalysisOptions, AnalysisReport };
pub use common::{ GenerationMode, Language, RhymeScheme, Sentiment };
pub use poem::{ PoemRequest, PoemRequestBuilder, PoemResult };
pub use theme::Theme;
