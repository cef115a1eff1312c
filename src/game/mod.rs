//! Game state: the shared dictionary and the per-player session

mod dictionary;
mod session;

pub use dictionary::Dictionary;
pub use session::{GameSession, GameState, GuessRecord};
