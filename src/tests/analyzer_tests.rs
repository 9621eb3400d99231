#[cfg(test)]
mod tests {
    use log::info;

    use crate::implementations::analyzer::{
        classify_sentiment,
        rhyme_density,
        vocabulary_variety,
        HeuristicAnalyzer,
    };
    use crate::implementations::profiles::{ EnglishProfile, RomanianProfile };
    use crate::models::analysis::AnalysisOptions;
    use crate::models::common::{ Language, Sentiment };
    use crate::tests::setup;
    use crate::traits::poem_analyzer::PoemAnalyzer;

    const BALANCED: &str = "golden rivers wander through the night
silver shadows gather in the light
morning petals open by the sea
tender echoes answer any plea";

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        setup();
        let analyzer = HeuristicAnalyzer::default();
        for text in ["", "   ", "\n\n  \n"] {
            let report = analyzer.analyze(text, Language::English);
            assert!(report.is_empty());
            assert_eq!(report.score, 0);
            assert!(report.suggestions.is_empty());
            assert!(report.notes.is_empty());
        }
    }

    #[test]
    fn test_balanced_poem_scores_full_marks() {
        setup();
        let analyzer = HeuristicAnalyzer::default();
        let report = analyzer.analyze(BALANCED, Language::English);
        info!("Report: {:?}", report);

        assert_eq!(report.lines.len(), 4);
        assert!((0..4).all(|i| report.syllables(i) == Some(9)));
        assert_eq!(report.average_syllables, 9.0);
        assert_eq!(report.syllable_stdev, 0.0);
        assert_eq!(report.meter_fit, 1.0);
        assert_eq!(report.rhyme_density, 1.0);
        assert_eq!(report.vocabulary_variety, 1.0);
        assert_eq!(report.sentiment, Sentiment::Positive);
        assert_eq!(report.score, 100);
        assert!(report.notes.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = HeuristicAnalyzer::default();
        let text = "the moon is bright tonight\nwe walk along the shore\nand hear the water sing";
        assert_eq!(
            analyzer.analyze(text, Language::English),
            analyzer.analyze(text, Language::English)
        );
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let analyzer = HeuristicAnalyzer::default();
        let spaced = BALANCED.replace('\n', "\n\n");
        assert_eq!(
            analyzer.analyze(&spaced, Language::English),
            analyzer.analyze(BALANCED, Language::English)
        );
    }

    #[test]
    fn test_rhyme_density() {
        let en = EnglishProfile;
        let poem = lines("I walk at night\nI see the light\nthe moon is bright\nthe sea");
        assert_eq!(rhyme_density(&poem, &en), 0.75);
        assert_eq!(rhyme_density(&lines("one line only"), &en), 0.0);
        assert_eq!(rhyme_density(&[], &en), 0.0);
    }

    #[test]
    fn test_lines_without_words_never_rhyme() {
        let en = EnglishProfile;
        assert_eq!(rhyme_density(&lines("...\n!!!"), &en), 0.0);
    }

    #[test]
    fn test_vocabulary_variety() {
        let en = EnglishProfile;
        let variety = vocabulary_variety("the rose the rose the rose", &en);
        assert!((variety - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(vocabulary_variety("the and of", &en), 0.0);
        assert_eq!(vocabulary_variety("", &en), 0.0);
    }

    #[test]
    fn test_sentiment() {
        let en = EnglishProfile;
        let ro = RomanianProfile;
        assert_eq!(classify_sentiment("love and light and hope", &en), Sentiment::Positive);
        assert_eq!(classify_sentiment("dark cold storm", &en), Sentiment::Negative);
        assert_eq!(classify_sentiment("love in the dark", &en), Sentiment::Neutral);
        assert_eq!(classify_sentiment("a table", &en), Sentiment::Neutral);
        assert_eq!(classify_sentiment("iubire și lumină", &ro), Sentiment::Positive);
        assert_eq!(classify_sentiment("o toamnă rece", &ro), Sentiment::Negative);

        // repeats count once
        assert_eq!(classify_sentiment("dark dark dark love light", &en), Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_through_trait() {
        let analyzer = HeuristicAnalyzer::default();
        assert_eq!(analyzer.sentiment("Love, LIGHT!", Language::English), Sentiment::Positive);
    }

    #[test]
    fn test_long_line_gets_shortening_suggestion() {
        let analyzer = HeuristicAnalyzer::default();
        let report = analyzer.analyze(
            "golden rivers wander through the night and silver shadows gather in the light",
            Language::English
        );
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].starts_with("Try shortening line 1"));
        assert!(report.suggestions[0].contains("gather in the'"));
    }

    #[test]
    fn test_short_line_gets_lengthening_suggestion() {
        let analyzer = HeuristicAnalyzer::default();
        let report = analyzer.analyze("tiny cat", Language::English);
        assert_eq!(report.syllables(0), Some(3));
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].starts_with("Line 1 is short (3 syllables)"));
        assert!(report.suggestions[0].contains("about 5 more"));
    }

    #[test]
    fn test_worst_line_is_reported() {
        let analyzer = HeuristicAnalyzer::default();
        let text = "golden rivers wander through the night\ntiny cat\nsilver shadows gather in the light";
        let report = analyzer.analyze(text, Language::English);
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].starts_with("Line 2 is short"));
    }

    #[test]
    fn test_romanian_suggestions_are_localized() {
        let analyzer = HeuristicAnalyzer::default();
        let report = analyzer.analyze("cer", Language::Romanian);
        assert!(report.suggestions[0].starts_with("Versul 1 e scurt"));
        assert!(report.notes.iter().any(|n| n.starts_with("Multe versuri")));
    }

    #[test]
    fn test_custom_target_range() {
        let analyzer = HeuristicAnalyzer::new(AnalysisOptions::with_target(2, 4));
        let report = analyzer.analyze("tiny cat", Language::English);
        assert_eq!(report.meter_fit, 1.0);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_weak_poem_collects_notes() {
        let analyzer = HeuristicAnalyzer::default();
        let report = analyzer.analyze("rose rose rose\nrose rose rose rose rose rose moon", Language::English);
        assert_eq!(report.notes.len(), 3);
        assert!(report.score < 50);
    }

    #[test]
    fn test_metrics_stay_in_bounds() {
        let analyzer = HeuristicAnalyzer::default();
        let samples = [
            BALANCED,
            "a",
            "dark dark dark\nthe the the the the the the the the the the the the the the",
            "luna plutește blând peste orașul tăcut\nși scriem zorilor scrisori de rai",
        ];
        for text in samples {
            for language in Language::all() {
                let report = analyzer.analyze(text, language);
                assert!(report.score <= 100);
                for ratio in [report.meter_fit, report.rhyme_density, report.vocabulary_variety] {
                    assert!((0.0..=1.0).contains(&ratio), "ratio {} out of range", ratio);
                }
                assert!(report.syllable_stdev >= 0.0);
            }
        }
    }
}
