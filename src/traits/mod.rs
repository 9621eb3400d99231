pub mod assistant;
pub mod language_profile;
pub mod poem_analyzer;
pub mod poem_generator;

// Re-export traits
pub use assistant::PoemAssistant;
pub use language_profile::LanguageProfile;
pub use poem_analyzer::PoemAnalyzer;
pub use poem_generator::PoemGenerator;
