pub mod store;

pub use store::{CsvDeckStore, DeckSource};
