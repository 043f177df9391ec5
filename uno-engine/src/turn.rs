use crate::card::{ActionKind, Card};

/// Where the turn engine is in its cycle.
///
/// `AwaitingAction` reads the pile, `ResolvingAction` applies a pending
/// skip, reverse or draw, `NormalTurn` hands control to the current player and
/// `CheckWin` either ends the game or moves on to the next player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingAction,
    ResolvingAction(ActionKind),
    NormalTurn,
    CheckWin,
    GameOver { winner: usize },
}

/// What a player did with a normal turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Card),
    DrewAndPlayed(Card),
    DrewAndKept,
    /// Nothing could be drawn, the turn ended without a card.
    DeckExhausted,
}

impl TurnOutcome {
    pub fn played_card(&self) -> Option<&Card> {
        match self {
            TurnOutcome::Played(card) | TurnOutcome::DrewAndPlayed(card) => Some(card),
            TurnOutcome::DrewAndKept | TurnOutcome::DeckExhausted => None,
        }
    }
}
