//! 3 Shot Poker execution module.
//!
//! This module contains the round-resolution engine:
//! - Deck construction and shuffling
//! - Three card (Shot) hand evaluation
//! - Five card (5 Shot) hand evaluation
//! - Round dealing, decision handling and settlement

pub mod deck;
pub mod five_card;
#[cfg(test)]
mod integration_tests;
pub mod round;
pub mod three_card;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use threeshot_types::casino::{Card, Stage};

/// Source of uniform values in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a source, which lets tests replay a fixed
/// sequence without a generator.
pub trait UnitRng {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UnitRng for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Deterministic random number generator.
///
/// Two generators built from the same seed and round id produce the same
/// sequence, so a whole round can be replayed from `(seed, round_id)`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha20Rng,
}

impl GameRng {
    /// Create a new RNG from a seed and round id.
    pub fn new(seed: u64, round_id: u64) -> Self {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&seed.to_be_bytes());
        key[8..16].copy_from_slice(&round_id.to_be_bytes());
        Self {
            inner: ChaCha20Rng::from_seed(key),
        }
    }

    /// Create a non-reproducible RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    /// Get a random u8 value.
    pub fn next_u8(&mut self) -> u8 {
        self.inner.gen()
    }

    /// Get a random f64 value in range [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen()
    }
}

impl UnitRng for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}

/// Error during round execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Hand passed to an evaluator has the wrong number of cards.
    #[error("{hand} hand must contain exactly {expected} cards (got {actual})")]
    WrongHandSize {
        hand: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Wager rejected before any card was dealt.
    #[error("{field} {requirement} (got {value})")]
    InvalidWager {
        field: &'static str,
        requirement: &'static str,
        value: i64,
    },
    /// A card set contains the same card twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// Invalid move for current round stage.
    #[error("move not allowed in {stage} stage")]
    InvalidMove { stage: Stage },
    /// Wager arithmetic exceeded the integer range.
    #[error("wager arithmetic overflowed")]
    Overflow,
}
