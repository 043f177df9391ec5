use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Card, CardColor},
    constants::*,
    error::{Result, UnoError},
    pile::Pile,
};

/// The draw pile. Cards are drawn from the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the full 108 card deck and shuffles it.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            for _ in 0..ZERO_CARDS_PER_COLOR {
                cards.push(Card::from_parts(0, Some(color)));
            }

            // Numbers 1-9, then Skip, Reverse and DrawTwo
            for rank in 1..=DRAW_TWO_RANK {
                for _ in 0..COPIES_PER_COLORED_RANK {
                    cards.push(Card::from_parts(rank, Some(color)));
                }
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        let mut deck = Self(cards);
        deck.shuffle(rng);
        deck
    }

    /// Uses the given cards as the deck, last card on top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Removes the top card. Callers check [`Deck::is_empty`] and replenish
    /// first, so an empty deck here is a logic error.
    pub fn draw(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::EmptyDeck)
    }

    pub(crate) fn put_bottom(&mut self, card: Card) {
        self.0.insert(0, card);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Refills an exhausted deck with everything under the pile's top card.
    ///
    /// Returns how many cards came back, which is zero when the pile only
    /// held its top card.
    pub fn replenish<R: Rng + ?Sized>(&mut self, pile: &mut Pile, rng: &mut R) -> Result<usize> {
        if !self.is_empty() {
            return Err(UnoError::DeckNotEmpty);
        }

        let mut cards = pile.drain_except_top();
        for card in &mut cards {
            card.recycle();
        }
        self.0 = cards;
        self.shuffle(rng);

        debug!(cards = self.len(), "replenished deck from pile");
        Ok(self.len())
    }
}
