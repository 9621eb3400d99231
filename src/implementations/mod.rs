pub mod analyzer;
pub mod assistant;
pub mod bigram;
pub mod export;
pub mod generator;
pub mod profiles;
pub mod text;
