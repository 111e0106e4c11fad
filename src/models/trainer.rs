//! Card selection, flip and progress lifecycle.
//!
//! The trainer owns the deck, the card on screen and the pending flip. Time is
//! passed in by the caller so the flip delay can be driven by the UI frame
//! loop in the app and by hand in tests.

use super::{Deck, FlipTimer, WordPair};
use crate::error::StoreError;
use crate::storage::{CsvDeckStore, DeckSource};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainerState {
    ShowingSource,
    ShowingTarget,
    AllLearned,
}

/// Which side of the card is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    Front,
    Back,
}

pub struct Trainer {
    deck: Deck,
    source: DeckSource,
    current_card: Option<WordPair>,
    state: TrainerState,
    flip_timer: FlipTimer,
    flip_delay: Duration,
    known_this_session: usize,
    store: CsvDeckStore,
    rng: StdRng,
}

impl Trainer {
    /// Loads the deck (progress, original, then built-in) and shows the first card.
    pub fn start(
        store: CsvDeckStore,
        flip_delay: Duration,
        rng: StdRng,
        now: Instant,
    ) -> Result<Self, StoreError> {
        let (pairs, source) = store.load_initial()?;
        Ok(Self::with_deck(pairs, source, store, flip_delay, rng, now))
    }

    /// Starts on an already loaded deck.
    pub fn with_deck(
        pairs: Vec<WordPair>,
        source: DeckSource,
        store: CsvDeckStore,
        flip_delay: Duration,
        rng: StdRng,
        now: Instant,
    ) -> Self {
        let mut trainer = Self {
            deck: Deck::new(pairs),
            source,
            current_card: None,
            state: TrainerState::ShowingSource,
            flip_timer: FlipTimer::default(),
            flip_delay,
            known_this_session: 0,
            store,
            rng,
        };
        trainer.advance(now);
        trainer
    }

    pub fn state(&self) -> TrainerState {
        self.state
    }

    pub fn current_card(&self) -> Option<&WordPair> {
        self.current_card.as_ref()
    }

    pub fn face(&self) -> CardFace {
        match self.state {
            TrainerState::ShowingTarget => CardFace::Back,
            TrainerState::ShowingSource | TrainerState::AllLearned => CardFace::Front,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn source(&self) -> DeckSource {
        self.source
    }

    /// Words left to learn.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn known_this_session(&self) -> usize {
        self.known_this_session
    }

    pub fn controls_enabled(&self) -> bool {
        self.state != TrainerState::AllLearned
    }

    /// Time until the pending flip fires, if one is pending.
    pub fn flip_due_in(&self, now: Instant) -> Option<Duration> {
        self.flip_timer.due_in(now)
    }

    /// Shows a new random card, or enters `AllLearned` when the deck is empty.
    pub fn advance(&mut self, now: Instant) {
        self.flip_timer.cancel();

        match self.deck.choose(&mut self.rng).cloned() {
            Some(pair) => {
                log::debug!("Showing '{}'", pair.source_term);
                self.current_card = Some(pair);
                self.state = TrainerState::ShowingSource;
                self.flip_timer.schedule(now, self.flip_delay);
            }
            None => {
                log::info!("All words learned");
                self.current_card = None;
                self.state = TrainerState::AllLearned;
                if let Err(e) = self.store.clear_progress() {
                    log::error!("{e}");
                }
            }
        }
    }

    /// Reveals the target term. Only valid while the source term is showing.
    pub fn flip(&mut self) -> bool {
        if self.state != TrainerState::ShowingSource {
            return false;
        }
        self.flip_timer.cancel();
        self.state = TrainerState::ShowingTarget;
        true
    }

    /// Fires the pending flip once it is due. Returns whether the card flipped.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.flip_timer.fire_if_due(now) {
            Some(_) => self.flip(),
            None => false,
        }
    }

    /// Drops the current card from the deck, saves progress and advances.
    ///
    /// A failed save is logged and returned, but the card stays removed in
    /// memory and the trainer still advances. The next successful save puts
    /// the file back in sync.
    pub fn mark_known(&mut self, now: Instant) -> Result<(), StoreError> {
        if self.state == TrainerState::AllLearned {
            return Ok(());
        }

        if let Some(card) = self.current_card.as_ref() {
            if self.deck.remove(card) {
                self.known_this_session += 1;
            }
        }

        let saved = self.store.save_progress(self.deck.pairs());
        if let Err(e) = &saved {
            log::error!("{e}. Progress is kept in memory only.");
        }

        self.advance(now);
        saved
    }

    pub fn mark_unknown(&mut self, now: Instant) {
        if self.state == TrainerState::AllLearned {
            return;
        }
        self.advance(now);
    }

    /// Forgets all progress and starts over from the original deck.
    pub fn reset(&mut self, now: Instant) -> Result<(), StoreError> {
        let (pairs, source) = self.store.load_reset()?;
        self.store.clear_progress()?;

        log::info!("Progress reset, {} words to learn", pairs.len());
        self.deck = Deck::new(pairs);
        self.source = source;
        self.known_this_session = 0;
        self.advance(now);
        Ok(())
    }
}
