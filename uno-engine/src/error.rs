use thiserror::Error;

use crate::card::CardColor;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player name `{0}` is already taken")]
    DuplicatePlayerName(String),
    #[error("Invalid card: rank {rank} with color {color:?}")]
    InvalidCard { rank: u8, color: Option<CardColor> },
    #[error("Tried to draw from an empty deck")]
    EmptyDeck,
    #[error("The deck can only be replenished once it is empty")]
    DeckNotEmpty,
    #[error("The deck holds no card that can start the pile")]
    NoStartingCard,
    #[error("Only wild cards can be given a color")]
    NotWild,
    #[error("The wild card already has a color")]
    ColorAlreadyAssigned,
    #[error("Invalid choice `{0}`")]
    InvalidChoice(String),
    #[error("Player `{0}` can no longer answer")]
    InputClosed(String),
    #[error("First player index {index} is out of range for {players} players")]
    InvalidFirstPlayer { index: usize, players: usize },
    #[error("No winner after {0} turns")]
    TurnLimitReached(u32),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
