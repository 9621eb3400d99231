use crate::models::common::Language;

/// Trait for language-specific lexical data used by the heuristics
pub trait LanguageProfile: Sync {
    /// Get the language this profile describes
    fn language(&self) -> Language;

    /// Seed corpus, one poem line per text line
    fn corpus(&self) -> &'static str;

    /// Function words ignored when measuring vocabulary
    fn stopwords(&self) -> &'static [&'static str];

    /// Characters counted as syllable nuclei
    fn vowels(&self) -> &'static str;

    /// Vowel pairs pronounced as a single syllable
    fn diphthongs(&self) -> &'static [&'static str];

    fn positive_words(&self) -> &'static [&'static str];

    fn negative_words(&self) -> &'static [&'static str];

    /// Line templates with `{kw}` slots
    fn templates(&self) -> &'static [&'static str];

    /// Slot fillers used when the request brings no keywords
    fn fallback_keywords(&self) -> &'static [&'static str];

    /// Word families whose members share a rhyme key
    fn rhyme_families(&self) -> &'static [&'static [&'static str]];

    /// Writing prompts offered by the theme suggester
    fn themes(&self) -> &'static [&'static str];

    fn is_vowel(&self, c: char) -> bool {
        self.vowels().contains(c)
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords().contains(&word)
    }
}
