use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use threeshot_types::casino::{Card, Decision, Rank, HOLE_CARDS};

/// How the simulated player decides after seeing the hole cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Always place the 2nd and 3rd Shot.
    Raise,
    /// Always fold after the 1st Shot.
    Fold,
    /// Raise on a pair, suited or near-connected cards, or a Queen or better.
    Basic,
}

impl Strategy {
    pub fn decide(&self, hole: [Card; HOLE_CARDS]) -> Decision {
        match self {
            Strategy::Raise => Decision::Raise,
            Strategy::Fold => Decision::Fold,
            Strategy::Basic => {
                let [a, b] = hole;
                let (low, high) = if a.rank <= b.rank {
                    (a.rank.value(), b.rank.value())
                } else {
                    (b.rank.value(), a.rank.value())
                };
                // A-2 and A-3 can still make the low wheel straight.
                let near = high - low <= 2 || (high == Rank::Ace as u8 && low <= Rank::Three as u8);
                let raise = low == high || a.suit == b.suit || near || high >= Rank::Queen as u8;
                if raise {
                    Decision::Raise
                } else {
                    Decision::Fold
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threeshot_execution::mocks::hand;

    fn hole(text: &str) -> [Card; 2] {
        hand(text).try_into().unwrap()
    }

    #[test]
    fn test_fixed_strategies() {
        assert_eq!(Strategy::Raise.decide(hole("2c 7d")), Decision::Raise);
        assert_eq!(Strategy::Fold.decide(hole("Ac Ad")), Decision::Fold);
    }

    #[test]
    fn test_basic_strategy() {
        assert_eq!(Strategy::Basic.decide(hole("4c 4d")), Decision::Raise);
        assert_eq!(Strategy::Basic.decide(hole("2h 9h")), Decision::Raise);
        assert_eq!(Strategy::Basic.decide(hole("6c 8d")), Decision::Raise);
        assert_eq!(Strategy::Basic.decide(hole("Qc 3d")), Decision::Raise);
        assert_eq!(Strategy::Basic.decide(hole("Ac 2d")), Decision::Raise);
        assert_eq!(Strategy::Basic.decide(hole("2c 7d")), Decision::Fold);
        assert_eq!(Strategy::Basic.decide(hole("Jd 4s")), Decision::Fold);
    }
}
