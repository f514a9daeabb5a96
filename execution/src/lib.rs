pub mod casino;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use casino::deck::{create_deck, deal, shuffle};
pub use casino::round::{play_round, resolve, settle, CardSource, Round, Wagers};
pub use casino::{GameError, GameRng, UnitRng};
