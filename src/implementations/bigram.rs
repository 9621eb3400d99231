use std::collections::{ BTreeSet, HashMap };

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::implementations::text::{ capitalize_first, tokenize };

const START: &str = "<s>";
const END: &str = "</s>";

/// First-order word model built from a small corpus
#[derive(Debug, Clone, Default)]
pub struct BigramModel {
    transitions: HashMap<String, Vec<String>>,
}

impl BigramModel {
    /// Build transitions from each non-blank line of `corpus`
    pub fn from_corpus(corpus: &str) -> Self {
        let mut transitions: HashMap<String, Vec<String>> = HashMap::new();

        for line in corpus.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut tokens = vec![START.to_string()];
            tokens.extend(tokenize(line));
            tokens.push(END.to_string());

            for pair in tokens.windows(2) {
                transitions.entry(pair[0].clone()).or_default().push(pair[1].clone());
            }
        }

        trace!("Built bigram model with {} states", transitions.len());
        Self { transitions }
    }

    /// Words seen after `word`. Unknown words restart from sentence openers.
    pub fn successors(&self, word: &str) -> &[String] {
        self.transitions
            .get(word)
            .or_else(|| self.transitions.get(START))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every word the corpus contains, sorted
    pub fn vocabulary(&self) -> Vec<String> {
        self.transitions
            .values()
            .flatten()
            .filter(|w| w.as_str() != END)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Walk the model to produce one line of at most `max_len` words.
    ///
    /// With probability 0.7 the line opens with one of `seeds`.
    pub fn generate_line<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_len: usize,
        seeds: &[String]
    ) -> String {
        let mut words: Vec<String> = Vec::new();

        if let Some(seed) = seeds.choose(rng) {
            if rng.gen_bool(0.7) {
                words.push(seed.clone());
            }
        }

        while words.len() < max_len {
            let prev = words.last().map(String::as_str).unwrap_or(START);
            match self.successors(prev).choose(rng) {
                Some(next) if next != END => words.push(next.clone()),
                _ => break,
            }
        }

        capitalize_first(&words.join(" "))
    }
}
