//! A turn-based Uno engine for human and AI players.
//!
//! [`Uno`] drives the game one state transition at a time. Everything it
//! needs from people goes through an [`Interface`] implementation, which also
//! receives a [`GameEvent`] for everything that happens at the table.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod event;
pub mod options;
pub mod pile;
pub mod player;
pub mod policy;
pub mod turn;
pub mod uno;

pub use card::{ActionKind, Card, CardColor};
pub use error::{Result, UnoError};
pub use event::{Acknowledge, GameEvent, Interface, Status};
pub use options::GameOptions;
pub use player::{Player, PlayerKind};
pub use policy::AiPolicy;
pub use turn::{Phase, TurnOutcome};
pub use uno::{PlayerSetup, Uno};
