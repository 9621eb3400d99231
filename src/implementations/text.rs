//! Word-level heuristics shared by the generator and the analyzer.

use std::sync::LazyLock;

use regex::Regex;

use crate::traits::language_profile::LanguageProfile;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w'-]+").expect("hardcoded regex pattern is valid"));

/// Lowercased words of `text`. Apostrophes and inner hyphens stay attached.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !w.trim_matches('-').is_empty())
        .map(str::to_string)
        .collect()
}

/// Last word of a line, or an empty string for a line without words
pub fn last_word(line: &str) -> String {
    tokenize(line).pop().unwrap_or_default()
}

fn is_rhyme_char(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, 'ă' | 'â' | 'î' | 'ș' | 'ț')
}

/// Terminal suffix two words must share to rhyme.
///
/// A trailing diphthong wins outright; otherwise the key runs from the last
/// vowel to the end of the word. Words without a vowel fall back to their
/// last three letters.
pub fn rhyme_key(word: &str, profile: &dyn LanguageProfile) -> String {
    let cleaned: String = word.to_lowercase().chars().filter(|c| is_rhyme_char(*c)).collect();

    if let Some(d) = profile.diphthongs().iter().find(|d| cleaned.ends_with(*d)) {
        return d.to_string();
    }

    let chars: Vec<char> = cleaned.chars().collect();
    match chars.iter().rposition(|c| profile.is_vowel(*c)) {
        Some(pos) => chars[pos..].iter().collect(),
        None => chars[chars.len().saturating_sub(3)..].iter().collect(),
    }
}

/// Approximate syllable count of a single word by counting vowel groups.
/// A non-empty word has at least one syllable.
pub fn approx_syllables(word: &str, profile: &dyn LanguageProfile) -> usize {
    let mut w = word.to_lowercase();
    if w.is_empty() {
        return 0;
    }

    if profile.diphthongs().is_empty() {
        // silent final e
        if w.ends_with('e') {
            w.pop();
        }
    } else {
        for d in profile.diphthongs() {
            w = w.replace(d, "*");
        }
    }

    let mut groups = 0;
    let mut in_group = false;
    for c in w.chars() {
        let nucleus = c == '*' || profile.is_vowel(c);
        if nucleus && !in_group {
            groups += 1;
        }
        in_group = nucleus;
    }
    groups.max(1)
}

pub fn line_syllables(line: &str, profile: &dyn LanguageProfile) -> usize {
    tokenize(line).iter().map(|w| approx_syllables(w, profile)).sum()
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Swap the final whitespace-separated word of `line` for `word`
pub fn replace_last_word(line: &str, word: &str) -> String {
    let trimmed = line.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(pos) => format!("{} {}", &trimmed[..pos], word),
        None => word.to_string(),
    }
}

/// Drop the final word of `line`
pub fn drop_last_word(line: &str) -> String {
    let trimmed = line.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(pos) => trimmed[..pos].trim_end().to_string(),
        None => String::new(),
    }
}
