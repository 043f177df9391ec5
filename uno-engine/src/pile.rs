use tracing::debug;

use crate::{
    card::{ActionKind, Card, CardColor},
    deck::Deck,
    error::{Result, UnoError},
};

/// The discard pile. Never empty once a game is set up; the top card is the
/// last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile(Vec<Card>);

impl Pile {
    /// Starts the pile with the first non-wild card drawn from `deck`. Wild
    /// cards drawn on the way go back under the deck.
    pub fn new(deck: &mut Deck) -> Result<Self> {
        for _ in 0..deck.len() {
            let card = deck.draw()?;
            if !card.is_wild() {
                debug!(%card, "starting pile");
                return Ok(Self(vec![card]));
            }
            debug!(%card, "wild card cannot start the pile, returning it to the deck");
            deck.put_bottom(card);
        }

        Err(UnoError::NoStartingCard)
    }

    /// Uses the given cards as the pile, last card on top.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(UnoError::NoStartingCard);
        }
        Ok(Self(cards))
    }

    pub fn top(&self) -> &Card {
        self.0
            .last()
            .expect("The pile always holds at least its top card.")
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn pending_action(&self) -> ActionKind {
        self.top().action()
    }

    pub fn consume_action(&mut self) {
        if let Some(top) = self.0.last_mut() {
            top.consume_action();
        }
    }

    /// Colors the wild card that was just played.
    pub fn assign_top_color(&mut self, color: CardColor) -> Result<()> {
        match self.0.last_mut() {
            Some(top) => top.assign_color(color),
            None => Err(UnoError::NoStartingCard),
        }
    }

    /// Takes every card except the top one, leaving the pile with just its top
    /// card.
    pub fn drain_except_top(&mut self) -> Vec<Card> {
        let keep_from = self.0.len().saturating_sub(1);
        self.0.drain(..keep_from).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}
