//! WordPair is a pair <source term, target term>. Only text is used on either side
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub source_term: String,
    pub target_term: String,
}

impl WordPair {
    pub fn new(source_term: impl Into<String>, target_term: impl Into<String>) -> Self {
        Self {
            source_term: source_term.into(),
            target_term: target_term.into(),
        }
    }
}

/// Words used when neither the progress file nor the original deck exists.
pub fn builtin_pairs() -> Vec<WordPair> {
    [
        ("Bonjour", "Hello"),
        ("Merci", "Thank you"),
        ("Au revoir", "Goodbye"),
        ("Comment", "How"),
        ("Soleil", "Sun"),
        ("Eau", "Water"),
    ]
    .into_iter()
    .map(|(source, target)| WordPair::new(source, target))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pair_creation() {
        let pair = WordPair::new("Bonjour", "Hello");

        assert_eq!(pair.source_term, "Bonjour");
        assert_eq!(pair.target_term, "Hello");
    }

    #[test]
    fn test_word_pair_value_equality() {
        let pair1 = WordPair::new("Merci", "Thank you");
        let pair2 = pair1.clone();

        assert_eq!(pair1, pair2);
        assert_ne!(pair1, WordPair::new("Merci", "Thanks"));
    }

    #[test]
    fn test_builtin_pairs() {
        let pairs = builtin_pairs();

        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], WordPair::new("Bonjour", "Hello"));
        assert_eq!(pairs[5], WordPair::new("Eau", "Water"));
    }
}
