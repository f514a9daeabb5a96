//! Data model shared by the 3 Shot Poker engine and its drivers.

pub mod casino;

pub use casino::{
    Card, Decision, DealtRoundCards, FiveCardHandPayoutRank, FiveShotResult, Paytable,
    PaytableEntry, Paytables, Rank, RoundResult, ShotResult, Stage, Suit, ThreeCardHandRank,
};
