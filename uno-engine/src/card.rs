use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{
    DRAW_FOUR_RANK, DRAW_TWO_RANK, MAX_RANK, REVERSE_RANK, SKIP_RANK, WILD_RANK,
};
use crate::error::{Result, UnoError};

/// The four suits a card can carry. Iteration order is the order colors are
/// offered when a wild card is played.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Effect a card has on the next player once it lands on the pile.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ActionKind {
    None,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    DrawFour,
}

impl ActionKind {
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            SKIP_RANK => ActionKind::Skip,
            REVERSE_RANK => ActionKind::Reverse,
            DRAW_TWO_RANK => ActionKind::DrawTwo,
            WILD_RANK => ActionKind::Wild,
            DRAW_FOUR_RANK => ActionKind::DrawFour,
            _ => ActionKind::None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    rank: u8,
    color: Option<CardColor>,
    action: ActionKind,
}

impl Card {
    /// Builds a card, deriving its action from the rank.
    ///
    /// A card without a color is only valid for the two wild ranks.
    pub fn new(rank: u8, color: Option<CardColor>) -> Result<Self> {
        if rank > MAX_RANK || (color.is_none() && rank < WILD_RANK) {
            return Err(UnoError::InvalidCard { rank, color });
        }

        Ok(Self::from_parts(rank, color))
    }

    pub(crate) fn from_parts(rank: u8, color: Option<CardColor>) -> Self {
        Self {
            rank,
            color,
            action: ActionKind::from_rank(rank),
        }
    }

    pub fn colored(rank: u8, color: CardColor) -> Result<Self> {
        Self::new(rank, Some(color))
    }

    pub fn wild() -> Self {
        Self::from_parts(WILD_RANK, None)
    }

    pub fn wild_draw_four() -> Self {
        Self::from_parts(DRAW_FOUR_RANK, None)
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn color(&self) -> Option<CardColor> {
        self.color
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn is_wild(&self) -> bool {
        self.rank >= WILD_RANK
    }

    /// Two cards match when they share a color or a rank, or when either of
    /// them is still colorless.
    pub fn matches(&self, other: &Card) -> bool {
        match (self.color, other.color) {
            (None, _) | (_, None) => true,
            (Some(a), Some(b)) => a == b || self.rank == other.rank,
        }
    }

    /// Gives a wild card its color. Happens once, right after the card is
    /// played.
    pub fn assign_color(&mut self, color: CardColor) -> Result<()> {
        if !self.is_wild() {
            return Err(UnoError::NotWild);
        }
        if self.color.is_some() {
            return Err(UnoError::ColorAlreadyAssigned);
        }
        self.color = Some(color);
        Ok(())
    }

    pub fn consume_action(&mut self) {
        self.action = ActionKind::None;
    }

    /// Puts a discarded card back into its dealt state before it returns to
    /// the deck.
    pub(crate) fn recycle(&mut self) {
        self.action = ActionKind::from_rank(self.rank);
        if self.is_wild() {
            self.color = None;
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.color {
            Some(color) => color.to_string(),
            None => "none".to_string(),
        };

        match self.rank {
            SKIP_RANK => write!(f, "{color} Skip"),
            REVERSE_RANK => write!(f, "{color} Reverse"),
            DRAW_TWO_RANK => write!(f, "{color} DrawTwo"),
            WILD_RANK => write!(f, "{color} Wild"),
            DRAW_FOUR_RANK => write!(f, "{color} Wild DrawFour"),
            number => write!(f, "{color} {number}"),
        }
    }
}
