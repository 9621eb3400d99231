#[cfg(test)]
mod tests {
    use crate::errors::AssistantError;
    use crate::models::common::{ GenerationMode, Language, RhymeScheme, Sentiment };
    use crate::models::poem::{ PoemRequest, PoemResult, DEFAULT_LINES_PER_STANZA, DEFAULT_STANZAS };
    use crate::tests::setup;

    #[test]
    fn test_parse_rhyme_schemes() {
        setup();
        assert_eq!("abab".parse::<RhymeScheme>().unwrap(), RhymeScheme::Abab);
        assert_eq!(" AABB ".parse::<RhymeScheme>().unwrap(), RhymeScheme::Aabb);
        assert_eq!("free".parse::<RhymeScheme>().unwrap(), RhymeScheme::Free);
        assert_eq!("".parse::<RhymeScheme>().unwrap(), RhymeScheme::Free);
        assert_eq!(
            "abcabc".parse::<RhymeScheme>().unwrap(),
            RhymeScheme::Custom("ABCABC".to_string())
        );

        let err = "AB-B".parse::<RhymeScheme>().unwrap_err();
        assert!(matches!(err, AssistantError::InvalidRhymeScheme { .. }));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_rhyme_groups() {
        assert_eq!(RhymeScheme::Abab.groups(4), vec![vec![0, 2], vec![1, 3]]);
        assert_eq!(RhymeScheme::Aabb.groups(6), vec![vec![0, 1, 4, 5], vec![2, 3]]);
        assert_eq!(RhymeScheme::Abba.groups(4), vec![vec![0, 3], vec![1, 2]]);
        assert_eq!(RhymeScheme::Abcb.groups(4), vec![vec![1, 3]]);
        assert_eq!(RhymeScheme::Aaaa.groups(3), vec![vec![0, 1, 2]]);
        assert!(RhymeScheme::Free.groups(8).is_empty());

        // truncated pattern
        assert_eq!(RhymeScheme::Abab.groups(3), vec![vec![0, 2]]);
        assert!(RhymeScheme::Aabb.groups(1).is_empty());
        assert!(RhymeScheme::Abab.groups(0).is_empty());
    }

    #[test]
    fn test_rhyme_scheme_serde() {
        let json = serde_json::to_string(&RhymeScheme::Abab).unwrap();
        assert_eq!(json, "\"ABAB\"");
        let free = serde_json::to_string(&RhymeScheme::Free).unwrap();
        assert_eq!(free, "\"free\"");

        let parsed: RhymeScheme = serde_json::from_str("\"xyxy\"").unwrap();
        assert_eq!(parsed, RhymeScheme::Custom("XYXY".to_string()));
        assert!(serde_json::from_str::<RhymeScheme>("\"A1\"").is_err());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("română".parse::<Language>().unwrap(), Language::Romanian);
        assert_eq!(Language::Romanian.code(), "ro");
        assert_eq!(Language::Romanian.to_string(), "Română");
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        assert_eq!(serde_json::from_str::<Language>("\"ro\"").unwrap(), Language::Romanian);

        let err = "fr".parse::<Language>().unwrap_err();
        assert!(matches!(err, AssistantError::UnsupportedLanguage(ref s) if s == "fr"));
    }

    #[test]
    fn test_generation_modes() {
        assert_eq!("Markov".parse::<GenerationMode>().unwrap(), GenerationMode::Bigram);
        assert_eq!("templates".parse::<GenerationMode>().unwrap(), GenerationMode::Template);
        assert!(matches!(
            "gpt".parse::<GenerationMode>(),
            Err(AssistantError::UnsupportedMode(_))
        ));
        assert_eq!(GenerationMode::default(), GenerationMode::Bigram);
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }

    #[test]
    fn test_request_builder() {
        let request = PoemRequest::builder(Language::Romanian)
            .topic("toamna")
            .keywords(["  Dor ", "", "Zbor"])
            .stanzas(0)
            .lines_per_stanza(0)
            .build();

        assert_eq!(request.keywords, vec!["dor", "zbor"]);
        assert_eq!(request.stanzas, 1);
        assert_eq!(request.lines_per_stanza, 1);
        assert_eq!(request.total_lines(), 1);
        assert_eq!(request.rhyme_scheme, RhymeScheme::Aabb);

        let defaults = PoemRequest::builder(Language::English).build();
        assert_eq!(defaults.total_lines(), DEFAULT_STANZAS * DEFAULT_LINES_PER_STANZA);
        assert!(defaults.target_syllables.is_none());
        assert!(defaults.seed.is_none());
    }

    #[test]
    fn test_poem_text_joins_stanzas() {
        let poem = PoemResult {
            language: Language::English,
            rhyme_scheme: RhymeScheme::Aabb,
            stanzas: vec![
                vec!["One light".to_string(), "Two night".to_string()],
                vec!["Three".to_string()],
            ],
        };
        assert_eq!(poem.line_count(), 3);
        assert_eq!(poem.text(), "One light\nTwo night\n\nThree");
        assert_eq!(poem.lines().last(), Some("Three"));
    }
}
