use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const SKIP_RANK: u8 = 10;
pub(crate) const REVERSE_RANK: u8 = 11;
pub(crate) const DRAW_TWO_RANK: u8 = 12;
pub(crate) const WILD_RANK: u8 = 13;
pub(crate) const DRAW_FOUR_RANK: u8 = 14;
pub(crate) const MAX_RANK: u8 = DRAW_FOUR_RANK;

/// Ranks 1 through 12 appear twice per color, rank 0 once.
pub(crate) const COPIES_PER_COLORED_RANK: u8 = 2;
pub(crate) const ZERO_CARDS_PER_COLOR: u8 = 1;

pub(crate) const COLORED_CARDS_PER_COLOR: u8 =
    ZERO_CARDS_PER_COLOR + COPIES_PER_COLORED_RANK * DRAW_TWO_RANK;
pub(crate) const COLORED_CARDS_IN_DECK: u8 = COLORED_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: u8 =
    COLORED_CARDS_IN_DECK + WILD_CARDS_IN_DECK + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub const STARTING_HAND_SIZE: usize = 7;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 10;

/// Colors offered for a wild card, in prompt order.
pub const WILD_COLORS: [CardColor; CardColor::COUNT] =
    [CardColor::Red, CardColor::Blue, CardColor::Green, CardColor::Yellow];

pub(crate) const DRAW_TWO_PENALTY: usize = 2;
pub(crate) const DRAW_FOUR_PENALTY: usize = 4;
