pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use config::Config;
pub use models::{CardFace, Deck, Trainer, TrainerState, WordPair};
pub use storage::{CsvDeckStore, DeckSource};
