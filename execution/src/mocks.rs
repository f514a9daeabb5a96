//! Fixtures for tests and deterministic simulations.

use crate::casino::UnitRng;
use threeshot_types::casino::{parse_cards, Card, DealtRoundCards};

/// Parse cards from text like `"Ah Kh Qh"`, panicking on invalid input.
pub fn hand(text: &str) -> Vec<Card> {
    parse_cards(text).expect("invalid card text in fixture")
}

/// Build a dealt round from hole and community card text.
pub fn dealt(hole: &str, community: &str) -> DealtRoundCards {
    let hole = hand(hole);
    let community = hand(community);
    DealtRoundCards::new(
        hole.try_into().expect("fixture needs exactly 2 hole cards"),
        community
            .try_into()
            .expect("fixture needs exactly 3 community cards"),
    )
}

/// A♥ K♥ in the hole, Q♥ J♥ T♥ on the board.
///
/// 1st Shot is a Mini Royal, 2nd/3rd Shot are flushes, 5 Shot is a royal flush.
pub fn royal_hearts() -> DealtRoundCards {
    dealt("Ah Kh", "Qh Jh Th")
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self { values, index: 0 }
    }
}

impl UnitRng for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
