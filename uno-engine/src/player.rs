use std::fmt::Display;

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    card::{Card, CardColor},
    constants::WILD_COLORS,
    deck::Deck,
    error::{Result, UnoError},
    event::{parse_choice, Acknowledge, GameEvent, Interface},
    pile::Pile,
    policy::AiPolicy,
    turn::TurnOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Decisions come from the [`Interface`].
    Human,
    Ai(AiPolicy),
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String, kind: PlayerKind, cards: Vec<Card>) -> Self {
        Self {
            name,
            kind,
            hand: cards,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Hand indexes of the cards that can go on `top`, in hand order.
    pub fn matching(&self, top: &Card) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(top))
            .map(|(index, _)| index)
            .collect()
    }

    /// Plays one normal turn against `top` of `pile`.
    ///
    /// Plays a matching card if there is one; otherwise draws a single card
    /// and plays it straight away when it matches.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        pile: &mut Pile,
        rng: &mut R,
        io: &mut dyn Interface,
    ) -> Result<TurnOutcome> {
        let top = pile.top().clone();
        io.notify(&GameEvent::TurnStarted {
            player: self.name.clone(),
            top: top.clone(),
            hand: self.is_human().then(|| self.hand.clone()),
        });

        let playable = self.matching(&top);
        let options: Vec<Card> = playable.iter().map(|&i| self.hand[i].clone()).collect();

        if let Some(choice) = self.decide_play(&options, rng, io)? {
            let card = self.play_card(playable[choice], pile, rng, io)?;
            return Ok(TurnOutcome::Played(card));
        }

        io.notify(&GameEvent::CannotPlay {
            player: self.name.clone(),
        });
        if self.is_human() {
            io.acknowledge(&self.name, Acknowledge::BeforeDraw);
        }

        let Some(drawn) = self.draw_card(deck, pile, rng, io)? else {
            return Ok(TurnOutcome::DeckExhausted);
        };

        io.notify(&GameEvent::CardDrawn {
            player: self.name.clone(),
            card: self.is_human().then(|| drawn.clone()),
        });

        if drawn.matches(&top) {
            io.notify(&GameEvent::DrawnCardPlayable {
                player: self.name.clone(),
            });
            let card = self.play_card(self.hand.len() - 1, pile, rng, io)?;
            Ok(TurnOutcome::DrewAndPlayed(card))
        } else {
            io.notify(&GameEvent::DrawnCardKept {
                player: self.name.clone(),
            });
            if self.is_human() {
                io.acknowledge(&self.name, Acknowledge::Continue);
            }
            Ok(TurnOutcome::DrewAndKept)
        }
    }

    /// Draws one card into the hand, refilling an exhausted deck from the pile
    /// first. Returns `None` when there is nothing left to draw anywhere.
    pub(crate) fn draw_card<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        pile: &mut Pile,
        rng: &mut R,
        io: &mut dyn Interface,
    ) -> Result<Option<Card>> {
        if deck.is_empty() {
            let cards = deck.replenish(pile, rng)?;
            if cards == 0 {
                warn!(player = %self.name, "deck and pile are exhausted, draw forfeited");
                io.notify(&GameEvent::DeckExhausted {
                    player: self.name.clone(),
                });
                return Ok(None);
            }
            io.notify(&GameEvent::DeckReplenished { cards });
        }

        let card = deck.draw()?;
        debug!(player = %self.name, %card, "drew card");
        self.add_card(card.clone());
        Ok(Some(card))
    }

    /// Moves a card from the hand to the pile and colors it if it is wild.
    ///
    /// The color is settled while the card is still in the hand, so a failed
    /// choice leaves hand and pile untouched.
    fn play_card<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        pile: &mut Pile,
        rng: &mut R,
        io: &mut dyn Interface,
    ) -> Result<Card> {
        let color = match self.hand[index].color() {
            Some(_) => None,
            None => Some(self.decide_color(rng, io)?),
        };

        let card = self.remove_card(index);
        debug!(player = %self.name, %card, "playing card");
        pile.push(card);
        if let Some(color) = color {
            pile.assign_top_color(color)?;
        }

        let card = pile.top().clone();
        io.notify(&GameEvent::CardPlayed {
            player: self.name.clone(),
            card: card.clone(),
        });
        if let Some(color) = color {
            io.notify(&GameEvent::ColorChosen {
                player: self.name.clone(),
                color,
            });
        }

        Ok(card)
    }

    /// Index into `options` of the card to play, `None` if nothing fits.
    fn decide_play<R: Rng + ?Sized>(
        &self,
        options: &[Card],
        rng: &mut R,
        io: &mut dyn Interface,
    ) -> Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }

        match self.kind {
            PlayerKind::Ai(policy) => Ok(policy.choose_card(options, rng)),
            PlayerKind::Human => loop {
                let input = io
                    .choose_card(&self.name, options)
                    .ok_or_else(|| UnoError::InputClosed(self.name.clone()))?;
                match parse_choice(&input, options.len()) {
                    Ok(index) => break Ok(Some(index)),
                    Err(error) => self.reject_choice(io, input, error),
                }
            },
        }
    }

    fn decide_color<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        io: &mut dyn Interface,
    ) -> Result<CardColor> {
        match self.kind {
            PlayerKind::Ai(policy) => Ok(policy.choose_color(rng)),
            PlayerKind::Human => loop {
                let input = io
                    .choose_color(&self.name, &WILD_COLORS)
                    .ok_or_else(|| UnoError::InputClosed(self.name.clone()))?;
                match parse_choice(&input, WILD_COLORS.len()) {
                    Ok(index) => break Ok(WILD_COLORS[index]),
                    Err(error) => self.reject_choice(io, input, error),
                }
            },
        }
    }

    fn reject_choice(&self, io: &mut dyn Interface, input: String, error: impl Display) {
        warn!(player = %self.name, %error, "invalid choice, asking again");
        io.notify(&GameEvent::InvalidChoice {
            player: self.name.clone(),
            input,
        });
    }
}
