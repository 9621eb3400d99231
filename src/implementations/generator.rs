use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use log::{ debug, info, trace };
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{ Rng, SeedableRng };

use crate::implementations::bigram::BigramModel;
use crate::implementations::profiles::profile_for;
use crate::implementations::text::{
    capitalize_first,
    drop_last_word,
    last_word,
    line_syllables,
    replace_last_word,
    rhyme_key,
    tokenize,
};
use crate::models::common::GenerationMode;
use crate::models::poem::{ PoemRequest, PoemResult };
use crate::traits::language_profile::LanguageProfile;
use crate::traits::poem_generator::PoemGenerator;

const SLOT: &str = "{kw}";

/// Generator backed by the built-in corpus, templates and rhyme lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusPoemGenerator;

impl CorpusPoemGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Per-call state shared by every stanza of one poem
struct Draft<'a> {
    profile: &'a dyn LanguageProfile,
    model: BigramModel,
    keywords: Vec<String>,
    lexicon: Vec<String>,
    rng: StdRng,
    slot_cursor: usize,
}

impl PoemGenerator for CorpusPoemGenerator {
    fn generate(&self, request: &PoemRequest) -> PoemResult {
        let profile = profile_for(request.language);
        info!(
            "Generating {}x{} poem in {} ({} mode, scheme {})",
            request.stanzas.max(1),
            request.lines_per_stanza.max(1),
            request.language,
            request.mode,
            request.rhyme_scheme
        );

        let rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let keywords = resolve_keywords(request, profile);
        if keywords.is_empty() {
            debug!("No keywords or topic words; generating from the corpus alone");
        } else {
            debug!("Keywords: {:?}", keywords);
        }

        let model = BigramModel::from_corpus(profile.corpus());
        let lexicon = build_lexicon(&keywords, &model, profile);

        let mut draft = Draft { profile, model, keywords, lexicon, rng, slot_cursor: 0 };

        let lines_per_stanza = request.lines_per_stanza.max(1);
        let groups = request.rhyme_scheme.groups(lines_per_stanza);
        trace!("Rhyme groups per stanza: {:?}", groups);

        let mut stanzas = Vec::with_capacity(request.stanzas.max(1));
        for _ in 0..request.stanzas.max(1) {
            let mut lines: Vec<String> = (0..lines_per_stanza)
                .map(|_| draft.line(request.mode))
                .collect();

            if let Some(range) = &request.target_syllables {
                draft.fit_meter(&mut lines, range);
            }
            for group in &groups {
                draft.enforce_rhyme(&mut lines, group);
            }

            stanzas.push(lines.iter().map(|l| capitalize_first(l)).collect());
        }

        PoemResult {
            language: request.language,
            rhyme_scheme: request.rhyme_scheme.clone(),
            stanzas,
        }
    }
}

/// Request keywords, or the topic's content words when there are none
fn resolve_keywords(request: &PoemRequest, profile: &dyn LanguageProfile) -> Vec<String> {
    let keywords: Vec<String> = request.keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        return keywords;
    }

    tokenize(&request.topic)
        .into_iter()
        .filter(|w| !profile.is_stopword(w))
        .collect()
}

/// Candidate line endings: keyword words, corpus words and rhyme families
fn build_lexicon(
    keywords: &[String],
    model: &BigramModel,
    profile: &dyn LanguageProfile
) -> Vec<String> {
    let mut words: BTreeSet<String> = keywords.iter().flat_map(|k| tokenize(k)).collect();
    words.extend(model.vocabulary());
    words.extend(
        profile
            .rhyme_families()
            .iter()
            .flat_map(|family| family.iter().map(|w| w.to_string()))
    );
    words.into_iter().collect()
}

impl Draft<'_> {
    fn line(&mut self, mode: GenerationMode) -> String {
        let line = match mode {
            GenerationMode::Bigram => self.bigram_line(),
            GenerationMode::Template => self.template_line(),
        };

        if line.trim().is_empty() {
            // only reachable with an empty corpus
            return self.filler();
        }
        line
    }

    fn bigram_line(&mut self) -> String {
        let max_len = self.rng.gen_range(6..=10);
        let mut line = self.model.generate_line(&mut self.rng, max_len, &self.keywords);

        if !line.is_empty() && !self.keywords.is_empty() && self.rng.gen_bool(0.5) {
            if let Some(kw) = self.keywords.choose(&mut self.rng) {
                line.push(' ');
                line.push_str(kw);
            }
        }
        line
    }

    fn template_line(&mut self) -> String {
        let Some(template) = self.profile.templates().choose(&mut self.rng).copied() else {
            return self.filler();
        };

        let mut line = template.to_string();
        while line.contains(SLOT) {
            let word = self.next_slot_word();
            line = line.replacen(SLOT, &word, 1);
        }
        line
    }

    /// Keywords in rotation, or a random fallback word when there are none
    fn next_slot_word(&mut self) -> String {
        if self.keywords.is_empty() {
            return self.filler();
        }
        let word = self.keywords[self.slot_cursor % self.keywords.len()].clone();
        self.slot_cursor += 1;
        word
    }

    fn filler(&mut self) -> String {
        self.profile
            .fallback_keywords()
            .choose(&mut self.rng)
            .map(|w| w.to_string())
            .unwrap_or_default()
    }

    /// One corrective pass per line: short lines gain a keyword, long ones
    /// with more than three words lose their last word.
    fn fit_meter(&mut self, lines: &mut [String], range: &RangeInclusive<usize>) {
        for line in lines.iter_mut() {
            let syllables = line_syllables(line.as_str(), self.profile);
            if syllables < *range.start() {
                if let Some(kw) = self.keywords.choose(&mut self.rng) {
                    trace!("Lengthening '{}' ({} syllables)", line, syllables);
                    line.push(' ');
                    line.push_str(kw);
                }
            } else if syllables > *range.end() && tokenize(line.as_str()).len() > 3 {
                trace!("Shortening '{}' ({} syllables)", line, syllables);
                *line = drop_last_word(line.as_str());
            }
        }
    }

    /// Make every line in `group` end on the anchor line's rhyme key. When
    /// the lexicon has no partner for some line, the whole group is
    /// rewritten from a built-in rhyme family.
    fn enforce_rhyme(&mut self, lines: &mut [String], group: &[usize]) {
        let Some((&anchor, rest)) = group.split_first() else {
            return;
        };
        let Some(anchor_line) = lines.get(anchor) else {
            return;
        };
        let key = rhyme_key(&last_word(anchor_line), self.profile);

        for &i in rest {
            let Some(line) = lines.get(i) else {
                continue;
            };
            let current = last_word(line);
            if rhyme_key(&current, self.profile) == key {
                continue;
            }

            let partners: Vec<&String> = self.lexicon
                .iter()
                .filter(|w| **w != current && rhyme_key(w, self.profile) == key)
                .collect();
            let partner = partners.choose(&mut self.rng).map(|w| w.to_string());
            match partner {
                Some(partner) => {
                    lines[i] = replace_last_word(&lines[i], &partner);
                }
                None => {
                    debug!("No rhyme for key '{}'; rewriting group {:?}", key, group);
                    self.rewrite_group(lines, group);
                    return;
                }
            }
        }
    }

    fn rewrite_group(&mut self, lines: &mut [String], group: &[usize]) {
        let Some(family) = self.profile.rhyme_families().choose(&mut self.rng) else {
            return;
        };
        let mut endings: Vec<&str> = family.to_vec();
        endings.shuffle(&mut self.rng);
        if endings.is_empty() {
            return;
        }

        for (n, &i) in group.iter().enumerate() {
            if let Some(line) = lines.get_mut(i) {
                *line = replace_last_word(line, endings[n % endings.len()]);
            }
        }
    }
}
