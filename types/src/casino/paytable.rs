use super::constants::{five_shot_payouts, shot_payouts};
use super::game::{FiveCardHandPayoutRank, ThreeCardHandRank};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A hand category and its to-one payout multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaytableEntry<R> {
    pub hand: R,
    pub payout: u64,
}

/// Ordered, immutable pay table.
///
/// Categories that are not listed pay nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paytable<R: Clone + 'static> {
    entries: Cow<'static, [PaytableEntry<R>]>,
}

impl<R: Clone + 'static> Paytable<R> {
    pub const fn from_static(entries: &'static [PaytableEntry<R>]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn new(entries: Vec<PaytableEntry<R>>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    pub fn entries(&self) -> &[PaytableEntry<R>] {
        &self.entries
    }
}

impl<R: Clone + PartialEq + 'static> Paytable<R> {
    /// Payout multiplier for `hand`, or 0 when the category is not listed.
    pub fn multiplier(&self, hand: R) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.hand == hand)
            .map_or(0, |entry| entry.payout)
    }

    /// First category listed more than once, if any.
    pub fn duplicate_category(&self) -> Option<R> {
        self.entries.iter().enumerate().find_map(|(i, entry)| {
            self.entries[..i]
                .iter()
                .any(|earlier| earlier.hand == entry.hand)
                .then(|| entry.hand.clone())
        })
    }
}

pub const GRAND_SIERRA_SHOT_PAYTABLE: Paytable<ThreeCardHandRank> = Paytable::from_static(&[
    PaytableEntry {
        hand: ThreeCardHandRank::MiniRoyal,
        payout: shot_payouts::MINI_ROYAL,
    },
    PaytableEntry {
        hand: ThreeCardHandRank::StraightFlush,
        payout: shot_payouts::STRAIGHT_FLUSH,
    },
    PaytableEntry {
        hand: ThreeCardHandRank::ThreeOfAKind,
        payout: shot_payouts::THREE_OF_A_KIND,
    },
    PaytableEntry {
        hand: ThreeCardHandRank::Straight,
        payout: shot_payouts::STRAIGHT,
    },
    PaytableEntry {
        hand: ThreeCardHandRank::Flush,
        payout: shot_payouts::FLUSH,
    },
    PaytableEntry {
        hand: ThreeCardHandRank::Pair,
        payout: shot_payouts::PAIR,
    },
]);

pub const GRAND_SIERRA_FIVE_SHOT_PAYTABLE: Paytable<FiveCardHandPayoutRank> =
    Paytable::from_static(&[
        PaytableEntry {
            hand: FiveCardHandPayoutRank::RoyalFlush,
            payout: five_shot_payouts::ROYAL_FLUSH,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::StraightFlush,
            payout: five_shot_payouts::STRAIGHT_FLUSH,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::FourOfAKind,
            payout: five_shot_payouts::FOUR_OF_A_KIND,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::FullHouse,
            payout: five_shot_payouts::FULL_HOUSE,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::Flush,
            payout: five_shot_payouts::FLUSH,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::Straight,
            payout: five_shot_payouts::STRAIGHT,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::ThreeOfAKind,
            payout: five_shot_payouts::THREE_OF_A_KIND,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::TwoPair,
            payout: five_shot_payouts::TWO_PAIR,
        },
        PaytableEntry {
            hand: FiveCardHandPayoutRank::PairTensOrBetter,
            payout: five_shot_payouts::PAIR_TENS_OR_BETTER,
        },
    ]);

/// The pay tables a round settles against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paytables {
    /// 1st/2nd/3rd Shot table.
    pub shot: Paytable<ThreeCardHandRank>,
    /// 5 Shot table.
    pub five_shot: Paytable<FiveCardHandPayoutRank>,
}

impl Paytables {
    /// Grand Sierra configuration (Shot pay table #2, 5 Shot pay table #1).
    pub const fn grand_sierra() -> Self {
        Self {
            shot: GRAND_SIERRA_SHOT_PAYTABLE,
            five_shot: GRAND_SIERRA_FIVE_SHOT_PAYTABLE,
        }
    }
}

impl Default for Paytables {
    fn default() -> Self {
        Self::grand_sierra()
    }
}
