use serde::{Deserialize, Serialize};
use std::fmt;

/// Three card hand categories used by the 1st, 2nd and 3rd Shot (higher is better).
///
/// `HighCard` doubles as the "all other" category and never pays.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreeCardHandRank {
    HighCard = 0,
    Pair = 1,
    Flush = 2,
    Straight = 3,
    ThreeOfAKind = 4,
    StraightFlush = 5,
    /// Suited A-K-Q.
    MiniRoyal = 6,
}

impl ThreeCardHandRank {
    /// Every category, highest precedence first.
    pub const ALL: [ThreeCardHandRank; 7] = [
        ThreeCardHandRank::MiniRoyal,
        ThreeCardHandRank::StraightFlush,
        ThreeCardHandRank::ThreeOfAKind,
        ThreeCardHandRank::Straight,
        ThreeCardHandRank::Flush,
        ThreeCardHandRank::Pair,
        ThreeCardHandRank::HighCard,
    ];
}

impl fmt::Display for ThreeCardHandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThreeCardHandRank::MiniRoyal => "Mini Royal",
            ThreeCardHandRank::StraightFlush => "Straight Flush",
            ThreeCardHandRank::ThreeOfAKind => "Three of a Kind",
            ThreeCardHandRank::Straight => "Straight",
            ThreeCardHandRank::Flush => "Flush",
            ThreeCardHandRank::Pair => "Pair",
            ThreeCardHandRank::HighCard => "All Other",
        };
        f.write_str(label)
    }
}

/// Five card payout categories used by the 5 Shot (higher is better).
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiveCardHandPayoutRank {
    AllOther = 0,
    PairTensOrBetter = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl FiveCardHandPayoutRank {
    /// Every category, highest precedence first.
    pub const ALL: [FiveCardHandPayoutRank; 10] = [
        FiveCardHandPayoutRank::RoyalFlush,
        FiveCardHandPayoutRank::StraightFlush,
        FiveCardHandPayoutRank::FourOfAKind,
        FiveCardHandPayoutRank::FullHouse,
        FiveCardHandPayoutRank::Flush,
        FiveCardHandPayoutRank::Straight,
        FiveCardHandPayoutRank::ThreeOfAKind,
        FiveCardHandPayoutRank::TwoPair,
        FiveCardHandPayoutRank::PairTensOrBetter,
        FiveCardHandPayoutRank::AllOther,
    ];
}

impl fmt::Display for FiveCardHandPayoutRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FiveCardHandPayoutRank::RoyalFlush => "Royal Flush",
            FiveCardHandPayoutRank::StraightFlush => "Straight Flush",
            FiveCardHandPayoutRank::FourOfAKind => "Four of a Kind",
            FiveCardHandPayoutRank::FullHouse => "Full House",
            FiveCardHandPayoutRank::Flush => "Flush",
            FiveCardHandPayoutRank::Straight => "Straight",
            FiveCardHandPayoutRank::ThreeOfAKind => "Three of a Kind",
            FiveCardHandPayoutRank::TwoPair => "Two Pair",
            FiveCardHandPayoutRank::PairTensOrBetter => "Pair of Tens or Better",
            FiveCardHandPayoutRank::AllOther => "All Other",
        };
        f.write_str(label)
    }
}

/// The player's single decision after seeing the hole cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Place the 2nd and 3rd Shot wagers.
    Raise,
    /// Forfeit the 1st Shot wager.
    Fold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Raise => f.write_str("raise"),
            Decision::Fold => f.write_str("fold"),
        }
    }
}

impl std::str::FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" | "call" => Ok(Decision::Raise),
            "fold" => Ok(Decision::Fold),
            other => Err(format!("unknown decision: {other}")),
        }
    }
}

/// Round stages.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Wagers configurable, no cards yet.
    Betting = 0,
    /// Cards dealt, hole cards visible, awaiting raise or fold.
    Decision = 1,
    /// Community cards and settlement final.
    Resolved = 2,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Betting => f.write_str("betting"),
            Stage::Decision => f.write_str("decision"),
            Stage::Resolved => f.write_str("resolved"),
        }
    }
}
