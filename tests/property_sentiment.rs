use proptest::prelude::*;

use review_analyzer::sentiment::{LexiconClassifier, SentimentClassifier, NEGATIVE, POSITIVE};

proptest! {
    #[test]
    fn label_is_always_in_the_defined_set(input in ".*") {
        let prediction = LexiconClassifier::new().classify(&input).unwrap();
        prop_assert!(prediction.label == POSITIVE || prediction.label == NEGATIVE);
        prop_assert!(!prediction.label.is_empty());
    }

    #[test]
    fn confidence_is_bounded(input in ".*") {
        let prediction = LexiconClassifier::new().classify(&input).unwrap();
        prop_assert!((0.5..=1.0).contains(&prediction.score));
    }
}
