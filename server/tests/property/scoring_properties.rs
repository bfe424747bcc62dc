use proptest::prelude::*;
use sentiment::{
    lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS},
    model::{Sentiment, SentimentModel, tokenize},
};

proptest! {
    #[test]
    fn prediction_is_deterministic(s in ".{0,300}") {
        let model = SentimentModel::new();
        prop_assert_eq!(model.predict(&s), model.predict(&s));
    }

    #[test]
    fn hit_counts_never_exceed_token_count(s in ".{0,300}") {
        let model = SentimentModel::new();
        let result = model.predict(&s);
        let tokens = tokenize(&s).len();
        prop_assert!(result.positive_words + result.negative_words <= tokens);
    }

    #[test]
    fn confidence_stays_in_unit_interval(s in ".{0,300}") {
        let model = SentimentModel::new();
        let result = model.predict(&s);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn label_follows_the_counts(s in ".{0,300}") {
        let model = SentimentModel::new();
        let result = model.predict(&s);
        let expected = match result.positive_words.cmp(&result.negative_words) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        };
        prop_assert_eq!(result.sentiment, expected);
    }

    #[test]
    fn text_without_lexicon_words_is_neutral(s in "[0-9 ]{0,300}") {
        let model = SentimentModel::new();
        let result = model.predict(&s);
        prop_assert_eq!(result.sentiment, Sentiment::Neutral);
        prop_assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn purely_positive_text_scores_full_confidence(
        words in prop::collection::vec(prop::sample::select(POSITIVE_WORDS), 1..20)
    ) {
        let model = SentimentModel::new();
        let result = model.predict(&words.join(" "));
        prop_assert_eq!(result.sentiment, Sentiment::Positive);
        prop_assert_eq!(result.confidence, 1.0);
        prop_assert_eq!(result.negative_words, 0);
    }

    #[test]
    fn purely_negative_text_scores_full_confidence(
        words in prop::collection::vec(prop::sample::select(NEGATIVE_WORDS), 1..20)
    ) {
        let model = SentimentModel::new();
        let result = model.predict(&words.join(" "));
        prop_assert_eq!(result.sentiment, Sentiment::Negative);
        prop_assert_eq!(result.confidence, 1.0);
        prop_assert_eq!(result.positive_words, 0);
    }

    #[test]
    fn ascii_case_does_not_change_the_outcome(s in "[ -~]{0,300}") {
        let model = SentimentModel::new();
        prop_assert_eq!(model.predict(&s), model.predict(&s.to_ascii_uppercase()));
    }

    #[test]
    fn trailing_punctuation_is_ignored(s in ".{0,300}") {
        let model = SentimentModel::new();
        prop_assert_eq!(model.predict(&s), model.predict(&format!("{s}!!!")));
    }
}
