/// Hole cards dealt to the player.
pub const HOLE_CARDS: usize = 2;

/// Community cards dealt face down.
pub const COMMUNITY_CARDS: usize = 3;

/// Cards in a Shot hand (both hole cards plus one community card).
pub const THREE_CARD_HAND_SIZE: usize = 3;

/// Cards in the 5 Shot hand (both hole cards plus all community cards).
pub const FIVE_CARD_HAND_SIZE: usize = 5;

/// Smallest accepted 1st Shot wager.
pub const MIN_FIRST_SHOT_BET: i64 = 1;

/// Grand Sierra pay table #2 for the 1st/2nd/3rd Shot, to-one.
pub mod shot_payouts {
    pub const MINI_ROYAL: u64 = 50;
    pub const STRAIGHT_FLUSH: u64 = 30;
    pub const THREE_OF_A_KIND: u64 = 20;
    pub const STRAIGHT: u64 = 4;
    pub const FLUSH: u64 = 2;
    pub const PAIR: u64 = 1;
}

/// Grand Sierra pay table #1 for the 5 Shot, to-one.
pub mod five_shot_payouts {
    pub const ROYAL_FLUSH: u64 = 500;
    pub const STRAIGHT_FLUSH: u64 = 200;
    pub const FOUR_OF_A_KIND: u64 = 50;
    pub const FULL_HOUSE: u64 = 40;
    pub const FLUSH: u64 = 30;
    pub const STRAIGHT: u64 = 20;
    pub const THREE_OF_A_KIND: u64 = 10;
    pub const TWO_PAIR: u64 = 2;
    pub const PAIR_TENS_OR_BETTER: u64 = 1;
}
