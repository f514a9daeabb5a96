use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Total cards in a standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// Ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Card rank, valued 2..=14 with Ace high.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value (2..=14).
    pub fn value(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            other => (b'0' + other.value()) as char,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Rank::ALL[(value - 2) as usize]),
            other => Err(other),
        }
    }
}

/// Card suit.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Compact encoding in `0..52`: `suit * 13 + (rank - 2)`.
    ///
    /// This matches the position of the card in a freshly created deck.
    pub fn index(&self) -> u8 {
        (self.suit as u8) * RANKS_PER_SUIT + (self.rank.value() - 2)
    }

    /// Inverse of [Card::index]. Returns `None` for values outside the deck.
    pub fn from_index(index: u8) -> Option<Self> {
        if index as usize >= CARDS_PER_DECK {
            return None;
        }
        let suit = Suit::ALL[(index / RANKS_PER_SUIT) as usize];
        let rank = Rank::ALL[(index % RANKS_PER_SUIT) as usize];
        Some(Self { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid card: {0:?}")]
pub struct CardParseError(pub String);

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || CardParseError(s.to_string());
        let mut chars = text.chars();
        let suit_char = chars.next_back().ok_or_else(invalid)?;
        let rank_text = chars.as_str();

        let suit = match suit_char.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => return Err(invalid()),
        };
        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            digit if digit.len() == 1 => {
                let value = digit
                    .parse::<u8>()
                    .map_err(|_| invalid())?;
                match value {
                    2..=9 => Rank::try_from(value).map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(invalid()),
        };
        Ok(Card { rank, suit })
    }
}

/// Parse a comma or whitespace separated list of cards (e.g. `"Ah,Kh"`).
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(Card::from_str)
        .collect()
}
