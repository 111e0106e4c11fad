pub mod deck;
pub mod flip_timer;
pub mod trainer;
pub mod word_pair;

pub use deck::Deck;
pub use flip_timer::{FlipHandle, FlipTimer};
pub use trainer::{CardFace, Trainer, TrainerState};
pub use word_pair::WordPair;
