use crate::models::poem::{ PoemRequest, PoemResult };

/// Trait for turning a request into a poem
///
/// Generation has no failure path: an empty keyword list or a missing rhyme
/// partner yields a best-effort poem rather than an error.
pub trait PoemGenerator {
    fn generate(&self, request: &PoemRequest) -> PoemResult;
}
