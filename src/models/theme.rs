use serde::{ Deserialize, Serialize };

use crate::models::common::Language;

/// A writing prompt with keywords derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub language: Language,
    pub prompt: String,
    pub keywords: Vec<String>,
}
