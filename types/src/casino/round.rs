use super::card::Card;
use super::constants::{COMMUNITY_CARDS, HOLE_CARDS};
use super::game::{Decision, FiveCardHandPayoutRank, ThreeCardHandRank};
use serde::{Deserialize, Serialize};

/// The five cards of a round: two hole cards, then three community cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealtRoundCards {
    pub hole_cards: [Card; HOLE_CARDS],
    pub community_cards: [Card; COMMUNITY_CARDS],
}

impl DealtRoundCards {
    pub const fn new(hole_cards: [Card; HOLE_CARDS], community_cards: [Card; COMMUNITY_CARDS]) -> Self {
        Self {
            hole_cards,
            community_cards,
        }
    }

    /// All five cards in deal order.
    pub fn all(&self) -> [Card; 5] {
        let [h1, h2] = self.hole_cards;
        let [c1, c2, c3] = self.community_cards;
        [h1, h2, c1, c2, c3]
    }

    /// First card that appears more than once, if any.
    pub fn duplicate_card(&self) -> Option<Card> {
        let cards = self.all();
        cards
            .iter()
            .enumerate()
            .find(|(i, card)| cards[..*i].contains(card))
            .map(|(_, card)| *card)
    }
}

/// Settlement of one Shot wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResult {
    pub hand: [Card; 3],
    pub rank: ThreeCardHandRank,
    pub wager: u64,
    pub payout_multiplier: u64,
    /// To-one winnings (profit only); 0 on a loss.
    pub winnings: u64,
}

/// Settlement of the 5 Shot side wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveShotResult {
    pub hand: [Card; 5],
    pub rank: FiveCardHandPayoutRank,
    pub wager: u64,
    pub payout_multiplier: u64,
    /// To-one winnings (profit only); 0 on a loss.
    pub winnings: u64,
}

/// Outcome of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub decision: Decision,
    pub hole_cards: [Card; HOLE_CARDS],
    pub community_cards: [Card; COMMUNITY_CARDS],
    pub first_shot: ShotResult,
    pub second_shot: ShotResult,
    pub third_shot: ShotResult,
    pub five_shot: FiveShotResult,
    /// Sum of the wagers actually placed.
    pub total_bet: u64,
    /// Sum of to-one winnings.
    pub total_winnings: u64,
    /// `total_winnings - total_bet`.
    pub total_net: i64,
}

impl RoundResult {
    pub fn shots(&self) -> [&ShotResult; 3] {
        [&self.first_shot, &self.second_shot, &self.third_shot]
    }
}
