//! Deck is the working set of word pairs not yet marked known
use super::WordPair;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    pairs: Vec<WordPair>,
}

impl Deck {
    pub fn new(pairs: Vec<WordPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.pairs.contains(pair)
    }

    /// Removes the first pair equal to `pair`. Returns false when nothing matched.
    pub fn remove(&mut self, pair: &WordPair) -> bool {
        match self.pairs.iter().position(|p| p == pair) {
            Some(idx) => {
                self.pairs.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Uniform pick with replacement. `None` on an empty deck.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&WordPair> {
        self.pairs.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_deck() -> Deck {
        Deck::new(vec![
            WordPair::new("Bonjour", "Hello"),
            WordPair::new("Merci", "Thank you"),
        ])
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut deck = sample_deck();
        let bonjour = WordPair::new("Bonjour", "Hello");

        assert!(deck.remove(&bonjour));
        assert!(!deck.remove(&bonjour));
        assert_eq!(deck.len(), 1);
        assert!(!deck.contains(&bonjour));
    }

    #[test]
    fn test_remove_takes_first_duplicate_only() {
        let eau = WordPair::new("Eau", "Water");
        let mut deck = Deck::new(vec![eau.clone(), eau.clone()]);

        assert!(deck.remove(&eau));
        assert_eq!(deck.len(), 1);
        assert!(deck.contains(&eau));
    }

    #[test]
    fn test_choose_on_empty_deck() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(deck.is_empty());
        assert!(deck.choose(&mut rng).is_none());
    }

    #[test]
    fn test_choose_reaches_every_pair() {
        let deck = sample_deck();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let pair = deck.choose(&mut rng).cloned();
            seen.insert(pair);
        }

        assert_eq!(seen.len(), 2);
    }
}
