//! Deck construction, shuffling and dealing.

use super::UnitRng;
use threeshot_types::casino::{Card, DealtRoundCards, Rank, Suit, CARDS_PER_DECK};
use tracing::debug;

/// Create an ordered 52-card deck (suit-major, ranks ascending).
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(CARDS_PER_DECK);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Map a unit value onto `0..bound`, clamping values outside `[0, 1)`.
fn unit_index(unit: f64, bound: usize) -> usize {
    // `as usize` saturates: NaN and negatives become 0.
    let index = (unit * bound as f64).floor() as usize;
    index.min(bound.saturating_sub(1))
}

/// Return a shuffled copy of `items` using Fisher-Yates.
///
/// The input is never modified. For each `i` from the last index down to 1,
/// index `i` is swapped with `floor(rng() * (i + 1))`, so a fixed source
/// always yields the same permutation.
pub fn shuffle<T: Clone, R: UnitRng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = unit_index(rng.next_unit(), i + 1);
        out.swap(i, j);
    }
    out
}

/// Shuffle a fresh deck and take two hole cards, then three community cards.
pub fn deal<R: UnitRng + ?Sized>(rng: &mut R) -> DealtRoundCards {
    let deck = shuffle(&create_deck(), rng);
    let cards = DealtRoundCards::new([deck[0], deck[1]], [deck[2], deck[3], deck[4]]);
    debug!(
        hole = %format_cards(&cards.hole_cards),
        community = %format_cards(&cards.community_cards),
        "dealt round"
    );
    cards
}

pub(crate) fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
