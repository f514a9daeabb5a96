//! 3 Shot Poker round engine.
//!
//! A round deals two hole cards and three community cards. Each Shot pairs
//! the hole cards with one community card; the 5 Shot uses all five.
//!
//! Settlement:
//! - 1st Shot: always wagered (`first_shot_bet`). Paid on Raise, forfeited on
//!   Fold regardless of the hand.
//! - 2nd/3rd Shot: wagered (`first_shot_bet` each) only on Raise.
//! - 5 Shot: optional side wager, settles independently of the decision.
//!
//! All payouts are to-one: winnings exclude the returned stake.
//!
//! Stages:
//! Betting -> Decision (cards dealt) -> Resolved (settled)

use super::deck::{deal, format_cards};
use super::{five_card, three_card, GameError, UnitRng};
use threeshot_types::casino::{
    Card, DealtRoundCards, Decision, FiveShotResult, Paytable, Paytables, RoundResult,
    ShotResult, Stage, ThreeCardHandRank, HOLE_CARDS, MIN_FIRST_SHOT_BET,
};
use tracing::{debug, warn};

/// Validated wagers for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wagers {
    first_shot: u64,
    five_shot: u64,
}

impl Wagers {
    /// Validate raw wager inputs.
    ///
    /// `first_shot_bet` must be positive; `five_shot_bet` must not be negative.
    pub fn new(first_shot_bet: i64, five_shot_bet: i64) -> Result<Self, GameError> {
        if first_shot_bet < MIN_FIRST_SHOT_BET {
            warn!(first_shot_bet, "rejected 1st Shot wager");
            return Err(GameError::InvalidWager {
                field: "first_shot_bet",
                requirement: "must be at least 1",
                value: first_shot_bet,
            });
        }
        if five_shot_bet < 0 {
            warn!(five_shot_bet, "rejected 5 Shot wager");
            return Err(GameError::InvalidWager {
                field: "five_shot_bet",
                requirement: "cannot be negative",
                value: five_shot_bet,
            });
        }
        Ok(Self {
            first_shot: first_shot_bet as u64,
            five_shot: five_shot_bet as u64,
        })
    }

    pub fn first_shot(&self) -> u64 {
        self.first_shot
    }

    pub fn five_shot(&self) -> u64 {
        self.five_shot
    }
}

/// Where a round's cards come from.
pub enum CardSource<'a> {
    /// Shuffle a fresh deck with the given source.
    Shuffle(&'a mut dyn UnitRng),
    /// Use a fixed card set (replay and simulation).
    PreDealt(DealtRoundCards),
}

fn ensure_distinct(cards: &DealtRoundCards) -> Result<(), GameError> {
    match cards.duplicate_card() {
        Some(card) => Err(GameError::DuplicateCard(card)),
        None => Ok(()),
    }
}

fn settle_shot(
    hand: [Card; 3],
    wager: u64,
    forfeited: bool,
    table: &Paytable<ThreeCardHandRank>,
) -> Result<ShotResult, GameError> {
    let rank = three_card::evaluate_hand(&hand)?;
    let payout_multiplier = if forfeited { 0 } else { table.multiplier(rank) };
    let winnings = wager
        .checked_mul(payout_multiplier)
        .ok_or(GameError::Overflow)?;
    Ok(ShotResult {
        hand,
        rank,
        wager,
        payout_multiplier,
        winnings,
    })
}

/// Settle a round from its cards and already-validated wagers.
pub fn settle(
    cards: &DealtRoundCards,
    wagers: Wagers,
    decision: Decision,
    paytables: &Paytables,
) -> Result<RoundResult, GameError> {
    let [h1, h2] = cards.hole_cards;
    let [c1, c2, c3] = cards.community_cards;

    let raised = decision == Decision::Raise;
    let placed = if raised { wagers.first_shot } else { 0 };

    // 2nd/3rd Shot still report their multiplier on a fold; with no wager they win nothing.
    let first_shot = settle_shot([h1, h2, c1], wagers.first_shot, !raised, &paytables.shot)?;
    let second_shot = settle_shot([h1, h2, c2], placed, false, &paytables.shot)?;
    let third_shot = settle_shot([h1, h2, c3], placed, false, &paytables.shot)?;

    let five_hand = [h1, h2, c1, c2, c3];
    let five_rank = five_card::evaluate_hand(&five_hand)?;
    let five_multiplier = paytables.five_shot.multiplier(five_rank);
    let five_shot = FiveShotResult {
        hand: five_hand,
        rank: five_rank,
        wager: wagers.five_shot,
        payout_multiplier: five_multiplier,
        winnings: wagers
            .five_shot
            .checked_mul(five_multiplier)
            .ok_or(GameError::Overflow)?,
    };

    let sum = |values: [u64; 4]| {
        values
            .into_iter()
            .try_fold(0u64, u64::checked_add)
            .ok_or(GameError::Overflow)
    };
    let total_bet = sum([
        first_shot.wager,
        second_shot.wager,
        third_shot.wager,
        five_shot.wager,
    ])?;
    let total_winnings = sum([
        first_shot.winnings,
        second_shot.winnings,
        third_shot.winnings,
        five_shot.winnings,
    ])?;
    let total_net = i64::try_from(total_winnings)
        .ok()
        .zip(i64::try_from(total_bet).ok())
        .and_then(|(won, bet)| won.checked_sub(bet))
        .ok_or(GameError::Overflow)?;

    debug!(
        %decision,
        hole = %format_cards(&cards.hole_cards),
        community = %format_cards(&cards.community_cards),
        first = %first_shot.rank,
        second = %second_shot.rank,
        third = %third_shot.rank,
        five = %five_shot.rank,
        total_bet,
        total_winnings,
        total_net,
        "resolved round"
    );

    Ok(RoundResult {
        decision,
        hole_cards: cards.hole_cards,
        community_cards: cards.community_cards,
        first_shot,
        second_shot,
        third_shot,
        five_shot,
        total_bet,
        total_winnings,
        total_net,
    })
}

/// Resolve a round from a dealt card set.
///
/// Wagers are validated before any card is examined.
pub fn resolve(
    cards: &DealtRoundCards,
    first_shot_bet: i64,
    five_shot_bet: i64,
    decision: Decision,
    paytables: &Paytables,
) -> Result<RoundResult, GameError> {
    let wagers = Wagers::new(first_shot_bet, five_shot_bet)?;
    ensure_distinct(cards)?;
    settle(cards, wagers, decision, paytables)
}

/// Validate wagers, obtain cards from `source`, and resolve the round.
///
/// Nothing is drawn from the source when a wager is invalid.
pub fn play_round(
    first_shot_bet: i64,
    five_shot_bet: i64,
    decision: Decision,
    source: CardSource<'_>,
    paytables: &Paytables,
) -> Result<RoundResult, GameError> {
    let wagers = Wagers::new(first_shot_bet, five_shot_bet)?;
    let cards = match source {
        CardSource::Shuffle(rng) => deal(rng),
        CardSource::PreDealt(cards) => {
            ensure_distinct(&cards)?;
            cards
        }
    };
    settle(&cards, wagers, decision, paytables)
}

/// A single round driven one step at a time.
///
/// Only `Decision` accepts a raise or fold; only `Betting` and `Resolved`
/// accept new wagers or a new deal. A rejected call leaves the round as it was.
#[derive(Clone, Debug)]
pub struct Round {
    paytables: Paytables,
    wagers: Wagers,
    stage: Stage,
    cards: Option<DealtRoundCards>,
    result: Option<RoundResult>,
}

impl Round {
    /// Start in `Betting` with the minimum 1st Shot wager and no 5 Shot wager.
    pub fn new(paytables: Paytables) -> Self {
        Self {
            paytables,
            wagers: Wagers {
                first_shot: MIN_FIRST_SHOT_BET as u64,
                five_shot: 0,
            },
            stage: Stage::Betting,
            cards: None,
            result: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn wagers(&self) -> Wagers {
        self.wagers
    }

    pub fn paytables(&self) -> &Paytables {
        &self.paytables
    }

    fn ensure_stage(&self, allowed: &[Stage]) -> Result<(), GameError> {
        if allowed.contains(&self.stage) {
            Ok(())
        } else {
            Err(GameError::InvalidMove { stage: self.stage })
        }
    }

    /// Set the wagers for the next deal.
    pub fn set_wagers(&mut self, first_shot_bet: i64, five_shot_bet: i64) -> Result<(), GameError> {
        self.ensure_stage(&[Stage::Betting, Stage::Resolved])?;
        self.wagers = Wagers::new(first_shot_bet, five_shot_bet)?;
        Ok(())
    }

    /// Shuffle and deal a new round, returning the hole cards.
    pub fn deal<R: UnitRng + ?Sized>(&mut self, rng: &mut R) -> Result<[Card; HOLE_CARDS], GameError> {
        self.ensure_stage(&[Stage::Betting, Stage::Resolved])?;
        let cards = deal(rng);
        Ok(self.start(cards))
    }

    /// Deal a fixed card set, returning the hole cards.
    pub fn deal_with(&mut self, cards: DealtRoundCards) -> Result<[Card; HOLE_CARDS], GameError> {
        self.ensure_stage(&[Stage::Betting, Stage::Resolved])?;
        ensure_distinct(&cards)?;
        Ok(self.start(cards))
    }

    fn start(&mut self, cards: DealtRoundCards) -> [Card; HOLE_CARDS] {
        self.cards = Some(cards);
        self.result = None;
        self.stage = Stage::Decision;
        cards.hole_cards
    }

    /// Apply the player's decision and settle the round.
    pub fn decide(&mut self, decision: Decision) -> Result<&RoundResult, GameError> {
        self.ensure_stage(&[Stage::Decision])?;
        let cards = self.cards.ok_or(GameError::InvalidMove { stage: self.stage })?;
        let result = settle(&cards, self.wagers, decision, &self.paytables)?;
        self.stage = Stage::Resolved;
        Ok(&*self.result.insert(result))
    }

    /// Hole cards of the current round, once dealt.
    pub fn hole_cards(&self) -> Option<[Card; HOLE_CARDS]> {
        self.cards.map(|cards| cards.hole_cards)
    }

    /// Community cards, visible only once the round is resolved.
    pub fn visible_community(&self) -> Option<[Card; 3]> {
        match self.stage {
            Stage::Resolved => self.cards.map(|cards| cards.community_cards),
            _ => None,
        }
    }

    /// Settlement of the last resolved round.
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }
}
