use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::ActionKind;
use crate::constants::{
    DRAW_FOUR_PENALTY, DRAW_TWO_PENALTY, MAX_PLAYERS, MIN_PLAYERS, STARTING_HAND_SIZE,
};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::event::{Acknowledge, GameEvent, Interface, Status};
use crate::options::GameOptions;
use crate::pile::Pile;
use crate::player::{Player, PlayerKind};
use crate::policy::AiPolicy;
use crate::turn::Phase;

/// Who sits at the table before any card is dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSetup {
    pub name: String,
    pub kind: PlayerKind,
}

impl PlayerSetup {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn ai(name: impl Into<String>, policy: AiPolicy) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Ai(policy),
        }
    }
}

/// The turn engine. Owns the deck, the pile, the players in turn order and
/// the one random source every shuffle and AI choice draws from.
#[derive(Debug)]
pub struct Uno {
    deck: Deck,
    pile: Pile,
    players: Vec<Player>,
    current_player_index: usize,
    phase: Phase,
    turns: u32,
    announced: bool,
    total_cards: usize,
    options: GameOptions,
    rng: ChaCha8Rng,
}

impl Uno {
    /// Shuffles a fresh deck, turns up the first pile card and deals
    /// seven cards to every player.
    pub fn new(setups: Vec<PlayerSetup>, options: GameOptions) -> Result<Self> {
        Self::validate_names(setups.iter().map(|setup| setup.name.as_str()))?;

        let mut rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut deck = Deck::new(&mut rng);
        let pile = Pile::new(&mut deck)?;

        let mut players = Vec::with_capacity(setups.len());
        for setup in setups {
            let cards = (0..STARTING_HAND_SIZE)
                .map(|_| deck.draw())
                .collect::<Result<Vec<_>>>()?;
            players.push(Player::new(setup.name, setup.kind, cards));
        }

        Self::assemble(deck, pile, players, options, rng)
    }

    /// Resumes from an arbitrary table, e.g. a hand-built test position.
    pub fn from_state(
        deck: Deck,
        pile: Pile,
        players: Vec<Player>,
        options: GameOptions,
    ) -> Result<Self> {
        Self::validate_names(players.iter().map(Player::name))?;

        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self::assemble(deck, pile, players, options, rng)
    }

    fn validate_names<'a>(names: impl ExactSizeIterator<Item = &'a str>) -> Result<()> {
        if names.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if names.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name) {
                return Err(UnoError::DuplicatePlayerName(name.to_string()));
            }
        }
        Ok(())
    }

    fn assemble(
        deck: Deck,
        pile: Pile,
        players: Vec<Player>,
        options: GameOptions,
        mut rng: ChaCha8Rng,
    ) -> Result<Self> {
        let current_player_index = match options.first_player {
            Some(index) if index < players.len() => index,
            Some(index) => {
                return Err(UnoError::InvalidFirstPlayer {
                    index,
                    players: players.len(),
                })
            }
            None => rng.gen_range(0..players.len()),
        };

        let total_cards =
            deck.len() + pile.len() + players.iter().map(Player::cards_count).sum::<usize>();

        info!(
            players = players.len(),
            first = players[current_player_index].name(),
            top = %pile.top(),
            "game set up"
        );

        Ok(Uno {
            deck,
            pile,
            players,
            current_player_index,
            phase: Phase::AwaitingAction,
            turns: 0,
            announced: false,
            total_cards,
            options,
            rng,
        })
    }

    /// Runs the game until somebody empties their hand.
    pub fn play(&mut self, io: &mut dyn Interface) -> Result<&Player> {
        loop {
            if let Phase::GameOver { winner } = self.advance(io)? {
                return Ok(&self.players[winner]);
            }
        }
    }

    /// Advances until the next player is up or the game is over.
    pub fn play_round(&mut self, io: &mut dyn Interface) -> Result<Phase> {
        loop {
            match self.advance(io)? {
                phase @ (Phase::AwaitingAction | Phase::GameOver { .. }) => return Ok(phase),
                _ => {}
            }
        }
    }

    /// Performs exactly one state transition and returns the new phase.
    pub fn advance(&mut self, io: &mut dyn Interface) -> Result<Phase> {
        match self.phase {
            Phase::AwaitingAction => self.await_action(io)?,
            Phase::ResolvingAction(action) => self.resolve_action(action, io)?,
            Phase::NormalTurn => self.normal_turn(io)?,
            Phase::CheckWin => self.check_win(io),
            Phase::GameOver { .. } => {}
        }

        debug_assert_eq!(
            self.card_count(),
            self.total_cards,
            "cards were created or lost"
        );
        debug!(phase = ?self.phase, player = self.current_player().name(), "advanced");

        Ok(self.phase)
    }

    fn await_action(&mut self, io: &mut dyn Interface) -> Result<()> {
        if !self.announced {
            self.announced = true;
            io.notify(&GameEvent::GameStarted {
                players: self.player_names(),
                first: self.current_player().name().to_string(),
                top: self.pile.top().clone(),
            });
        }

        if let Some(limit) = self.options.turn_limit {
            if self.turns >= limit {
                return Err(UnoError::TurnLimitReached(limit));
            }
        }

        io.notify(&GameEvent::Status(self.status()));

        self.phase = match self.pile.pending_action() {
            ActionKind::None => Phase::NormalTurn,
            ActionKind::Wild => {
                self.pile.consume_action();
                Phase::NormalTurn
            }
            action => Phase::ResolvingAction(action),
        };
        Ok(())
    }

    fn resolve_action(&mut self, action: ActionKind, io: &mut dyn Interface) -> Result<()> {
        let player = self.current_player().name().to_string();

        match action {
            ActionKind::Skip => {
                info!(player = %player, "turn skipped");
                io.notify(&GameEvent::TurnSkipped {
                    player: player.clone(),
                });
                self.acknowledge_forfeit(&player, io);
                self.forfeit_turn();
            }
            ActionKind::DrawTwo | ActionKind::DrawFour => {
                let count = if action == ActionKind::DrawTwo {
                    DRAW_TWO_PENALTY
                } else {
                    DRAW_FOUR_PENALTY
                };
                io.notify(&GameEvent::ForcedDraw {
                    player: player.clone(),
                    action,
                    count,
                });
                self.acknowledge_forfeit(&player, io);
                let drawn = self.draw_cards_to_current_player(count, io)?;
                info!(player = %player, count, drawn, "forced draw");
                self.forfeit_turn();
            }
            ActionKind::Reverse => {
                self.perform_reverse();
                self.pile.consume_action();
                let by = self.previous_player().name().to_string();
                info!(by = %by, next = self.current_player().name(), "order reversed");
                io.notify(&GameEvent::OrderReversed {
                    by,
                    order: self.player_names(),
                });
                self.phase = Phase::NormalTurn;
            }
            ActionKind::None | ActionKind::Wild => {
                self.pile.consume_action();
                self.phase = Phase::NormalTurn;
            }
        }
        Ok(())
    }

    fn acknowledge_forfeit(&self, player: &str, io: &mut dyn Interface) {
        if self.current_player().is_human() {
            io.acknowledge(player, Acknowledge::Continue);
        }
    }

    /// Ends the current player's turn without letting them play.
    fn forfeit_turn(&mut self) {
        self.pile.consume_action();
        self.turns += 1;
        self.move_to_next_player();
        self.phase = Phase::AwaitingAction;
    }

    fn normal_turn(&mut self, io: &mut dyn Interface) -> Result<()> {
        let Uno {
            deck,
            pile,
            players,
            rng,
            current_player_index,
            ..
        } = self;
        let player = &mut players[*current_player_index];

        let outcome = player.take_turn(deck, pile, rng, io)?;
        debug!(player = player.name(), ?outcome, "turn taken");
        if let Some(card) = outcome.played_card() {
            info!(player = player.name(), %card, "card played");
        }

        self.turns += 1;
        self.phase = Phase::CheckWin;
        Ok(())
    }

    fn check_win(&mut self, io: &mut dyn Interface) {
        if self.current_player().has_won() {
            let player = self.current_player().name().to_string();
            info!(player = %player, turns = self.turns, "game won");
            io.notify(&GameEvent::Winner { player });
            self.phase = Phase::GameOver {
                winner: self.current_player_index,
            };
        } else {
            self.move_to_next_player();
            self.phase = Phase::AwaitingAction;
        }
    }

    /// Deals `count` cards to the current player, stopping early only when
    /// nothing is left anywhere to draw.
    fn draw_cards_to_current_player(
        &mut self,
        count: usize,
        io: &mut dyn Interface,
    ) -> Result<usize> {
        let Uno {
            deck,
            pile,
            players,
            rng,
            current_player_index,
            ..
        } = self;
        let player = &mut players[*current_player_index];

        let mut drawn = 0;
        while drawn < count {
            if player.draw_card(deck, pile, rng, io)?.is_none() {
                break;
            }
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Flips the seating order. The player after whoever played the reverse
    /// card, counted in the new order, is up next.
    fn perform_reverse(&mut self) {
        let player_count = self.players.len();
        let reverser = (self.current_player_index + player_count - 1) % player_count;

        self.players.reverse();

        let reverser = player_count - 1 - reverser;
        self.current_player_index = (reverser + 1) % player_count;
    }

    fn move_to_next_player(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }

    fn player_names(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|player| player.name().to_string())
            .collect()
    }

    pub fn status(&self) -> Status {
        Status {
            deck: self.deck.len(),
            top: self.pile.top().clone(),
            players: self
                .players
                .iter()
                .map(|player| (player.name().to_string(), player.cards_count()))
                .collect(),
        }
    }

    /// Cards in the deck, the pile and every hand.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.pile.len()
            + self
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    fn previous_player(&self) -> &Player {
        let player_count = self.players.len();
        &self.players[(self.current_player_index + player_count - 1) % player_count]
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::GameOver { winner } => self.players.get(winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CardColor};

    struct Quiet;

    impl Interface for Quiet {
        fn notify(&mut self, _event: &GameEvent) {}

        fn choose_card(&mut self, _player: &str, _options: &[Card]) -> Option<String> {
            None
        }

        fn choose_color(&mut self, _player: &str, _colors: &[CardColor]) -> Option<String> {
            None
        }

        fn acknowledge(&mut self, _player: &str, _reason: Acknowledge) {}
    }

    fn create_setups(count: usize) -> Vec<PlayerSetup> {
        (0..count)
            .map(|i| PlayerSetup::ai(format!("Player {}", i + 1), AiPolicy::Random))
            .collect()
    }

    fn seeded() -> GameOptions {
        GameOptions::default().with_seed(11).with_first_player(0)
    }

    fn names(uno: &Uno) -> Vec<String> {
        uno.player_names()
    }

    #[test]
    fn return_ok_if_enough_players() {
        assert!(Uno::new(create_setups(1), seeded()).is_ok());
        assert!(Uno::new(create_setups(4), seeded()).is_ok());
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Uno::new(create_setups(0), seeded()).unwrap_err();
        assert_eq!(error, UnoError::NotEnoughPlayers);
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Uno::new(create_setups(11), seeded()).unwrap_err();
        assert_eq!(error, UnoError::TooManyPlayers);
    }

    #[test]
    fn return_err_on_duplicate_names() {
        let setups = vec![
            PlayerSetup::human("Ada"),
            PlayerSetup::ai("Ada", AiPolicy::FirstChoice),
        ];
        let error = Uno::new(setups, seeded()).unwrap_err();
        assert_eq!(error, UnoError::DuplicatePlayerName("Ada".to_string()));
    }

    #[test]
    fn return_err_on_out_of_range_first_player() {
        let options = GameOptions::default().with_first_player(3);
        let error = Uno::new(create_setups(3), options).unwrap_err();
        assert_eq!(
            error,
            UnoError::InvalidFirstPlayer {
                index: 3,
                players: 3
            }
        );
    }

    #[test]
    fn all_players_start_with_7_cards() {
        let uno = Uno::new(create_setups(4), seeded()).unwrap();
        for player in uno.players() {
            assert_eq!(player.cards_count(), 7);
        }
        assert_eq!(uno.pile().len(), 1);
        assert_eq!(uno.deck().len(), 108 - 28 - 1);
        assert_eq!(uno.card_count(), 108);
    }

    #[test]
    fn first_player_is_random_without_option() {
        let mut firsts = HashSet::new();
        for seed in 0..40 {
            let uno = Uno::new(create_setups(4), GameOptions::default().with_seed(seed)).unwrap();
            firsts.insert(uno.current_player_index());
        }
        assert!(firsts.len() > 1);
    }

    #[test]
    fn status_reports_deck_top_and_hands() {
        let uno = Uno::new(create_setups(3), seeded()).unwrap();

        let status = uno.status();

        assert_eq!(status.deck, 108 - 21 - 1);
        assert_eq!(&status.top, uno.pile().top());
        assert_eq!(
            status.players,
            vec![
                ("Player 1".to_string(), 7),
                ("Player 2".to_string(), 7),
                ("Player 3".to_string(), 7),
            ]
        );
    }

    #[test]
    fn next_player_wraps_around() {
        let mut uno = Uno::new(create_setups(4), seeded()).unwrap();
        uno.current_player_index = 3;

        uno.move_to_next_player();

        assert_eq!(uno.current_player_index, 0);
    }

    #[test]
    fn perform_reverse_flips_order_and_hands_turn_back() {
        let mut uno = Uno::new(create_setups(4), seeded()).unwrap();
        // Player 1 just played the reverse, Player 2 was next
        uno.current_player_index = 1;

        uno.perform_reverse();

        assert_eq!(
            names(&uno),
            vec!["Player 4", "Player 3", "Player 2", "Player 1"]
        );
        assert_eq!(uno.current_player().name(), "Player 4");
    }

    #[test]
    fn perform_reverse_twice_restores_order() {
        let mut uno = Uno::new(create_setups(5), seeded()).unwrap();
        let before = names(&uno);

        uno.perform_reverse();
        uno.perform_reverse();

        assert_eq!(names(&uno), before);
    }

    #[test]
    fn card_count_is_conserved_through_a_whole_game() {
        let mut uno = Uno::new(
            create_setups(4),
            GameOptions::default().with_seed(5).with_turn_limit(5_000),
        )
        .unwrap();

        loop {
            let phase = uno.advance(&mut Quiet).unwrap();
            assert_eq!(uno.card_count(), 108);
            if matches!(phase, Phase::GameOver { .. }) {
                break;
            }
        }

        assert!(uno.winner().unwrap().has_won());
    }

    #[test]
    fn game_over_is_terminal() {
        let mut uno = Uno::new(
            create_setups(2),
            GameOptions::default().with_seed(8).with_turn_limit(5_000),
        )
        .unwrap();
        let winner = uno.play(&mut Quiet).unwrap().name().to_string();
        let turns = uno.turns();

        let phase = uno.advance(&mut Quiet).unwrap();

        assert!(matches!(phase, Phase::GameOver { .. }));
        assert_eq!(uno.turns(), turns);
        assert_eq!(uno.winner().unwrap().name(), winner);
    }

    #[test]
    fn turn_limit_stops_the_game() {
        let mut uno = Uno::new(
            create_setups(3),
            GameOptions::default().with_seed(1).with_turn_limit(2),
        )
        .unwrap();

        let result = uno.play(&mut Quiet);

        assert!(matches!(
            result,
            Err(UnoError::TurnLimitReached(2))
        ));
    }
}
