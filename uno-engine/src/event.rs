//! The boundary between the engine and whatever shows the game to people.
//!
//! The engine reports everything that happens as a [`GameEvent`] and asks the
//! [`Interface`] for the decisions human players have to make.

use crate::{
    card::{ActionKind, Card, CardColor},
    error::{Result, UnoError},
};

/// Snapshot used for the status banner shown at the start of every round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub deck: usize,
    pub top: Card,
    /// Player names with their card counts, in turn order.
    pub players: Vec<(String, usize)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        players: Vec<String>,
        first: String,
        top: Card,
    },
    Status(Status),
    /// `hand` is only filled in for human players.
    TurnStarted {
        player: String,
        top: Card,
        hand: Option<Vec<Card>>,
    },
    CardPlayed {
        player: String,
        card: Card,
    },
    ColorChosen {
        player: String,
        color: CardColor,
    },
    CannotPlay {
        player: String,
    },
    /// `card` is hidden from everyone but a human drawer.
    CardDrawn {
        player: String,
        card: Option<Card>,
    },
    DrawnCardPlayable {
        player: String,
    },
    DrawnCardKept {
        player: String,
    },
    TurnSkipped {
        player: String,
    },
    OrderReversed {
        by: String,
        order: Vec<String>,
    },
    /// Announced before the cards are dealt; `count` is the penalty, fewer
    /// cards arrive only when the deck runs out (see `DeckExhausted`).
    ForcedDraw {
        player: String,
        action: ActionKind,
        count: usize,
    },
    DeckReplenished {
        cards: usize,
    },
    /// Nothing left to draw, the draw is forfeited.
    DeckExhausted {
        player: String,
    },
    InvalidChoice {
        player: String,
        input: String,
    },
    Winner {
        player: String,
    },
}

/// Why a human player is asked to press a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acknowledge {
    BeforeDraw,
    Continue,
}

/// The I/O collaborator. Every method blocks until the person answers.
pub trait Interface {
    fn notify(&mut self, event: &GameEvent);

    /// Raw answer to "which card?"; parsed as a 1-based index into `options`.
    /// `None` means the input is gone for good.
    fn choose_card(&mut self, player: &str, options: &[Card]) -> Option<String>;

    /// Raw answer to "which color?"; parsed as a 1-based index into `colors`.
    fn choose_color(&mut self, player: &str, colors: &[CardColor]) -> Option<String>;

    fn acknowledge(&mut self, player: &str, reason: Acknowledge);
}

/// Parses a 1-based menu answer into a 0-based index below `len`.
pub fn parse_choice(input: &str, len: usize) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=len).contains(&choice) => Ok(choice - 1),
        _ => Err(UnoError::InvalidChoice(input.trim().to_string())),
    }
}
