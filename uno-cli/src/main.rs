mod config;
mod console;
mod logging;
mod setup;

use std::io::{stdin, stdout, BufRead, Write};

use color_eyre::Result;
use console::Console;
use tracing::info;
use uno_engine::{GameOptions, Uno};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let options = config::game_options_from_env()?;
    let mut console = Console::new(stdin().lock(), stdout());

    run(&mut console, options)?;
    Ok(())
}

/// Seats the players, plays one game and returns the winner's name.
fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, options: GameOptions) -> Result<String> {
    let setups = setup::ask_players(console)?;
    let mut uno = Uno::new(setups, options)?;

    let winner = uno.play(console)?.name().to_string();
    info!(winner = %winner, turns = uno.turns(), "game over");

    Ok(winner)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn run_seats_players_and_reports_the_winner() {
        let input = "2\n2\nFirst\n1\n2\nDice\nrandom\n";
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let options = GameOptions::default().with_seed(4).with_turn_limit(10_000);

        let winner = run(&mut console, options).unwrap();

        assert!(winner == "First" || winner == "Dice");
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(&format!("{winner} wins!")));
    }

    #[test]
    fn run_fails_when_setup_input_closes() {
        let mut console = Console::new(Cursor::new(b"2\n".to_vec()), Vec::new());
        assert!(run(&mut console, GameOptions::default()).is_err());
    }
}
