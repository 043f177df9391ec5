use std::io::{BufRead, Write};
use std::str::FromStr;

use color_eyre::eyre::{eyre, Result};
use strum::IntoEnumIterator;
use uno_engine::{
    constants::{MAX_PLAYERS, MIN_PLAYERS},
    event::parse_choice,
    AiPolicy, PlayerSetup,
};

use crate::console::Console;

/// Asks who is playing: how many, and for each seat a human name or an AI
/// name with its policy.
pub fn ask_players<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Vec<PlayerSetup>> {
    let count = loop {
        let answer = ask(console, "How many people are playing UNO? ")?;
        match answer.trim().parse::<usize>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => break count,
            _ => console.say(format_args!(
                "Please enter a number from {MIN_PLAYERS} to {MAX_PLAYERS}."
            )),
        }
    };

    let mut setups: Vec<PlayerSetup> = Vec::with_capacity(count);
    for seat in 1..=count {
        console.say("1: human\n2: AI");
        let is_human = loop {
            let answer = ask(console, &format!("Is player #{seat} a human or an AI? "))?;
            match parse_choice(&answer, 2) {
                Ok(choice) => break choice == 0,
                Err(error) => console.say(error),
            }
        };

        let name = loop {
            let answer = ask(console, &format!("Player #{seat}, enter your name: "))?;
            let name = answer.trim();
            if name.is_empty() {
                console.say("The name can't be empty.");
            } else if setups.iter().any(|setup| setup.name == name) {
                console.say(format_args!("{name} is already playing, pick another name."));
            } else {
                break name.to_string();
            }
        };

        if is_human {
            setups.push(PlayerSetup::human(name));
        } else {
            let policy = ask_policy(console, &name)?;
            setups.push(PlayerSetup::ai(name, policy));
        }
    }

    Ok(setups)
}

/// Accepts either the menu number or the policy name.
fn ask_policy<R: BufRead, W: Write>(console: &mut Console<R, W>, name: &str) -> Result<AiPolicy> {
    let policies: Vec<AiPolicy> = AiPolicy::iter().collect();
    for (index, policy) in policies.iter().enumerate() {
        console.say(format_args!("{}: {}", index + 1, policy));
    }

    loop {
        let answer = ask(console, &format!("How should {name} play? "))?;
        if let Ok(policy) = AiPolicy::from_str(answer.trim()) {
            return Ok(policy);
        }
        match parse_choice(&answer, policies.len()) {
            Ok(index) => return Ok(policies[index]),
            Err(error) => console.say(error),
        }
    }
}

fn ask<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> Result<String> {
    console
        .ask(prompt)
        .ok_or_else(|| eyre!("input closed during game setup"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use uno_engine::PlayerKind;

    use super::*;

    fn setups(input: &str) -> Result<Vec<PlayerSetup>> {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        ask_players(&mut console)
    }

    #[test]
    fn human_and_ai_seats() {
        let setups = setups("2\n1\nAda\n2\nBot\naction-preferring\n").unwrap();

        assert_eq!(
            setups,
            vec![
                PlayerSetup::human("Ada"),
                PlayerSetup::ai("Bot", AiPolicy::ActionPreferring),
            ]
        );
    }

    #[test]
    fn policy_by_menu_number() {
        let setups = setups("1\n2\nBot\n3\n").unwrap();
        assert_eq!(setups[0].kind, PlayerKind::Ai(AiPolicy::Random));
    }

    #[test]
    fn bad_answers_are_asked_again() {
        let input = "zero\n0\n11\n2\nhuman\n1\nAda\n1\n\nAda\nBea\n";
        let setups = setups(input).unwrap();

        assert_eq!(
            setups,
            vec![PlayerSetup::human("Ada"), PlayerSetup::human("Bea")]
        );
    }

    #[test]
    fn closed_input_fails_setup() {
        assert!(setups("3\n1\nAda\n").is_err());
    }
}
