use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::warn;
use uno_engine::{Acknowledge, ActionKind, Card, CardColor, GameEvent, Interface};

/// Plays the game over a line-based text stream, usually stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) {
        if let Err(error) = writeln!(self.output, "{line}") {
            warn!(%error, "failed to write to the console");
        }
    }

    /// Shows `prompt` and waits for a line. `None` once the input is closed.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(error) = write!(self.output, "{prompt}").and_then(|_| self.output.flush()) {
            warn!(%error, "failed to write to the console");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(error) => {
                warn!(%error, "failed to read from the console");
                None
            }
        }
    }

    fn menu<T: Display>(&mut self, items: &[T]) {
        for (index, item) in items.iter().enumerate() {
            self.say(format_args!("{}: {}", index + 1, item));
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Interface for Console<R, W> {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted {
                players,
                first,
                top,
            } => {
                self.say(format_args!("Players: {}", players.join(", ")));
                self.say(format_args!("{first} goes first. The pile starts with {top}."));
            }
            GameEvent::Status(status) => {
                self.say("-------");
                for (name, cards) in &status.players {
                    self.say(format_args!("{name} has {cards} cards."));
                }
                self.say(format_args!(
                    "An Uno deck with {} cards remaining.",
                    status.deck
                ));
                self.say("-------");
            }
            GameEvent::TurnStarted { player, top, hand } => {
                self.say(format_args!("{player}, it's your turn."));
                self.say(format_args!("The pile has {top} on top."));
                if let Some(hand) = hand {
                    self.say("Your hand:");
                    for card in hand {
                        self.say(card);
                    }
                }
            }
            GameEvent::CardPlayed { player, card } => {
                self.say(format_args!("{player} played {card}."));
            }
            GameEvent::ColorChosen { player, color } => {
                self.say(format_args!("{player} made the wild card {color}."));
            }
            GameEvent::CannotPlay { player } => {
                self.say(format_args!("{player} can't play, so they have to draw."));
            }
            GameEvent::CardDrawn { player, card } => match card {
                Some(card) => self.say(format_args!("{player} drew: {card}")),
                None => self.say(format_args!("{player} drew a card.")),
            },
            GameEvent::DrawnCardPlayable { .. } => {
                self.say("Good -- that one can be played!");
            }
            GameEvent::DrawnCardKept { player } => {
                self.say(format_args!("Sorry, {player} still can't play."));
            }
            GameEvent::TurnSkipped { player } => {
                self.say(format_args!(
                    "Sorry {player}, your turn was skipped! Better luck next time!"
                ));
            }
            GameEvent::OrderReversed { by, order } => {
                self.say(format_args!(
                    "{by} has just played a reverse card so the playing order has to be reversed."
                ));
                self.say(format_args!("New order: {}", order.join(", ")));
            }
            GameEvent::ForcedDraw {
                player,
                action,
                count,
            } => {
                let card = match action {
                    ActionKind::DrawFour => "Wild DrawFour",
                    _ => "DrawTwo",
                };
                self.say(format_args!(
                    "Sorry {player}, a {card} card has been played: you draw {count} cards and can't play."
                ));
            }
            GameEvent::DeckReplenished { cards } => {
                self.say(format_args!(
                    "The deck is empty now. {cards} cards in the pile are taken back to the deck."
                ));
            }
            GameEvent::DeckExhausted { player } => {
                self.say(format_args!(
                    "There is nothing left to draw, {player} gets no card."
                ));
            }
            GameEvent::InvalidChoice { input, .. } => {
                self.say(format_args!("`{input}` is not one of the choices, try again."));
            }
            GameEvent::Winner { player } => {
                self.say(format_args!("{player} wins!"));
                self.say("Thanks for playing!");
            }
        }
    }

    fn choose_card(&mut self, _player: &str, options: &[Card]) -> Option<String> {
        self.menu(options);
        self.ask("Which do you want to play? ")
    }

    fn choose_color(&mut self, _player: &str, colors: &[CardColor]) -> Option<String> {
        self.menu(colors);
        self.ask("What color do you want for the wild card? ")
    }

    fn acknowledge(&mut self, _player: &str, reason: Acknowledge) {
        let prompt = match reason {
            Acknowledge::BeforeDraw => "Press enter to draw.",
            Acknowledge::Continue => "Press enter to continue.",
        };
        // A closed input must not block the game, the next real prompt reports it
        let _ = self.ask(prompt);
    }
}
