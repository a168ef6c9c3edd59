use crate::error::ClassifyError;

/// Labels follow the SST-2 convention: the classifier always commits to one
/// of the two polarities.
pub const POSITIVE: &str = "POSITIVE";
pub const NEGATIVE: &str = "NEGATIVE";

#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    /// Confidence in [0.5, 1.0]. 0.5 means the lexicon found no signal.
    pub score: f32,
}

/// Synchronous polarity classifier, injected into the pipeline so tests can
/// swap in fakes.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Prediction, ClassifyError>;
}

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "beautiful", "best", "comfortable", "durable",
    "easy", "excellent", "fantastic", "fast", "flawless", "good", "great",
    "happy", "helpful", "impressed", "love", "loved", "nice", "perfect",
    "pleased", "quality", "quick", "recommend", "reliable", "satisfied",
    "smooth", "solid", "sturdy", "superb", "wonderful", "worth",
];

const NEGATIVE_WORDS: &[&str] = &[
    "awful", "bad", "broke", "broken", "cheap", "defective", "disappointed",
    "disappointing", "expensive", "faulty", "flimsy", "hate", "hated",
    "horrible", "late", "misleading", "worst", "poor", "refund", "return",
    "returned", "slow", "terrible", "useless", "waste", "worthless", "wrong",
];

const NEGATIONS: &[&str] = &["not", "never", "no", "isnt", "wasnt", "dont", "didnt", "cant", "wont"];

/// Lexicon-scoring classifier standing in for a local model inference call.
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Prediction, ClassifyError> {
        let mut positive = 0i32;
        let mut negative = 0i32;
        let mut negated = false;

        for raw in text.split_whitespace() {
            let word: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            if NEGATIONS.contains(&word.as_str()) {
                // Flips the polarity of the next sentiment-bearing word.
                negated = true;
                continue;
            }

            let polarity = if POSITIVE_WORDS.contains(&word.as_str()) {
                Some(true)
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                Some(false)
            } else {
                None
            };

            if let Some(is_positive) = polarity {
                if is_positive != negated {
                    positive += 1;
                } else {
                    negative += 1;
                }
            }
            negated = false;
        }

        let signal = positive - negative;
        let hits = positive + negative;
        let label = if signal < 0 { NEGATIVE } else { POSITIVE };
        let score = if hits == 0 {
            0.5
        } else {
            (0.5 + 0.5 * signal.unsigned_abs() as f32 / hits as f32).min(1.0)
        };

        Ok(Prediction {
            label: label.to_string(),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_review_is_positive() {
        let p = LexiconClassifier::new()
            .classify("Great product, fast shipping!")
            .unwrap();
        assert_eq!(p.label, POSITIVE);
        assert!(p.score > 0.5);
    }

    #[test]
    fn negative_review_is_negative() {
        let p = LexiconClassifier::new()
            .classify("Terrible quality, it broke after a day and the refund was slow.")
            .unwrap();
        assert_eq!(p.label, NEGATIVE);
    }

    #[test]
    fn negation_flips_polarity() {
        let p = LexiconClassifier::new().classify("not good at all").unwrap();
        assert_eq!(p.label, NEGATIVE);
    }

    #[test]
    fn empty_text_still_gets_a_label() {
        let p = LexiconClassifier::new().classify("").unwrap();
        assert!(!p.label.is_empty());
        assert_eq!(p.score, 0.5);
    }
}
