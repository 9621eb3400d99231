#[cfg(test)]
mod tests {
    use log::{ debug, info };

    use crate::implementations::generator::CorpusPoemGenerator;
    use crate::implementations::profiles::profile_for;
    use crate::implementations::text::{ last_word, line_syllables, rhyme_key };
    use crate::models::common::{ GenerationMode, Language, RhymeScheme };
    use crate::models::poem::{ PoemRequest, PoemResult };
    use crate::tests::setup;
    use crate::traits::poem_generator::PoemGenerator;

    fn schemes() -> Vec<RhymeScheme> {
        vec![
            RhymeScheme::Aabb,
            RhymeScheme::Abab,
            RhymeScheme::Abba,
            RhymeScheme::Abcb,
            RhymeScheme::Aaaa,
            RhymeScheme::Free,
            RhymeScheme::Custom("AAB".to_string()),
            RhymeScheme::Custom("ABCABC".to_string()),
        ]
    }

    fn request(language: Language, keywords: &[&str], scheme: RhymeScheme, seed: u64) -> PoemRequest {
        PoemRequest::builder(language)
            .keywords(keywords.iter().copied())
            .rhyme_scheme(scheme)
            .seed(Some(seed))
            .build()
    }

    fn assert_rhymes(poem: &PoemResult, lines_per_stanza: usize) {
        let profile = profile_for(poem.language);
        let groups = poem.rhyme_scheme.groups(lines_per_stanza);
        for stanza in &poem.stanzas {
            for group in &groups {
                let keys: Vec<String> = group
                    .iter()
                    .map(|&i| rhyme_key(&last_word(&stanza[i]), profile))
                    .collect();
                debug!("Group {:?} keys {:?}", group, keys);
                assert!(
                    keys.iter().all(|k| *k == keys[0]),
                    "lines {:?} of {:?} do not rhyme: {:?}",
                    group,
                    stanza,
                    keys
                );
            }
        }
    }

    #[test]
    fn test_generates_requested_shape() {
        setup();
        let generator = CorpusPoemGenerator::new();
        let request = PoemRequest::builder(Language::English)
            .keywords(["ember", "harbor"])
            .stanzas(3)
            .lines_per_stanza(5)
            .seed(Some(1))
            .build();

        let poem = generator.generate(&request);
        info!("Generated poem:\n{}", poem.text());

        assert_eq!(poem.stanzas.len(), 3);
        assert!(poem.stanzas.iter().all(|s| s.len() == 5));
        assert_eq!(poem.line_count(), 15);
        assert!(poem.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn test_non_empty_keywords_always_give_lines() {
        setup();
        let generator = CorpusPoemGenerator::new();
        for language in Language::all() {
            for mode in [GenerationMode::Bigram, GenerationMode::Template] {
                for seed in 0..20 {
                    let request = PoemRequest::builder(language)
                        .keywords(["stea", "light"])
                        .mode(mode)
                        .seed(Some(seed))
                        .build();
                    let poem = generator.generate(&request);
                    assert!(poem.line_count() > 0);
                }
            }
        }
    }

    #[test]
    fn test_empty_keywords_and_topic_still_generate() {
        setup();
        let generator = CorpusPoemGenerator::new();
        for mode in [GenerationMode::Bigram, GenerationMode::Template] {
            let request = PoemRequest::builder(Language::Romanian)
                .mode(mode)
                .seed(Some(3))
                .build();
            let poem = generator.generate(&request);
            assert_eq!(poem.line_count(), request.total_lines());
            assert!(poem.lines().all(|l| !l.is_empty()));
        }
    }

    #[test]
    fn test_rhyme_groups_share_a_key() {
        setup();
        let generator = CorpusPoemGenerator::new();
        for language in Language::all() {
            for scheme in schemes() {
                for seed in 0..15 {
                    let poem = generator.generate(
                        &request(language, &["ocean", "dor", "whisper"], scheme.clone(), seed)
                    );
                    assert_rhymes(&poem, 4);
                }
            }
        }
    }

    #[test]
    fn test_rhyme_groups_hold_in_template_mode_with_meter_fitting() {
        setup();
        let generator = CorpusPoemGenerator::new();
        for language in Language::all() {
            for scheme in schemes() {
                for seed in 0..10 {
                    let request = PoemRequest::builder(language)
                        .topic("a pocket full of rain")
                        .rhyme_scheme(scheme.clone())
                        .lines_per_stanza(6)
                        .mode(GenerationMode::Template)
                        .target_syllables(Some(8..=10))
                        .seed(Some(seed))
                        .build();
                    let poem = generator.generate(&request);
                    assert_rhymes(&poem, 6);
                }
            }
        }
    }

    #[test]
    fn test_long_single_rhyme_group() {
        let generator = CorpusPoemGenerator::new();
        let request = PoemRequest::builder(Language::English)
            .keywords(["zzz"])
            .rhyme_scheme(RhymeScheme::Aaaa)
            .lines_per_stanza(12)
            .seed(Some(99))
            .build();
        let poem = generator.generate(&request);
        assert_rhymes(&poem, 12);
    }

    #[test]
    fn test_same_seed_same_poem() {
        let generator = CorpusPoemGenerator::new();
        let a = generator.generate(&request(Language::English, &["ember"], RhymeScheme::Abab, 42));
        let b = generator.generate(&request(Language::English, &["ember"], RhymeScheme::Abab, 42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lines_are_capitalized() {
        let generator = CorpusPoemGenerator::new();
        let poem = generator.generate(&request(Language::Romanian, &["ștergar"], RhymeScheme::Aabb, 5));
        for line in poem.lines() {
            let first = line.chars().next().unwrap();
            assert!(!first.is_lowercase(), "line not capitalized: {}", line);
        }
    }

    #[test]
    fn test_template_mode_uses_topic_words() {
        let generator = CorpusPoemGenerator::new();
        let request = PoemRequest::builder(Language::English)
            .topic("the quiet river")
            .rhyme_scheme(RhymeScheme::Free)
            .mode(GenerationMode::Template)
            .seed(Some(8))
            .build();

        let poem = generator.generate(&request);
        for line in poem.lines() {
            let lower = line.to_lowercase();
            assert!(
                lower.contains("quiet") || lower.contains("river"),
                "no topic word in '{}'",
                line
            );
        }
    }

    #[test]
    fn test_template_mode_without_keywords_uses_fallbacks() {
        let generator = CorpusPoemGenerator::new();
        let request = PoemRequest::builder(Language::English)
            .rhyme_scheme(RhymeScheme::Free)
            .mode(GenerationMode::Template)
            .seed(Some(4))
            .build();

        let fallbacks = profile_for(Language::English).fallback_keywords();
        let poem = generator.generate(&request);
        for line in poem.lines() {
            let lower = line.to_lowercase();
            assert!(fallbacks.iter().any(|w| lower.contains(w)), "no filler in '{}'", line);
            assert!(!lower.contains("{kw}"));
        }
    }

    #[test]
    fn test_meter_fitting_trims_long_lines() {
        let generator = CorpusPoemGenerator::new();
        let profile = profile_for(Language::English);
        for seed in 0..10 {
            let fitted = PoemRequest::builder(Language::English)
                .keywords(["extraordinarily"])
                .rhyme_scheme(RhymeScheme::Free)
                .target_syllables(Some(1..=2))
                .seed(Some(seed))
                .build();
            let unfitted = PoemRequest { target_syllables: None, ..fitted.clone() };

            let a = generator.generate(&fitted);
            let b = generator.generate(&unfitted);
            let total = |p: &PoemResult| p.lines().map(|l| line_syllables(l, profile)).sum::<usize>();
            assert!(total(&a) <= total(&b));
        }
    }
}
