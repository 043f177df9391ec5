use rand::{seq::SliceRandom, Rng};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    card::{ActionKind, Card, CardColor},
    constants::WILD_COLORS,
};

/// How an automated player picks its card and wild color.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum AiPolicy {
    /// Always the first playable card, always red.
    FirstChoice,
    /// The first playable action card, otherwise any playable card.
    ActionPreferring,
    Random,
}

impl AiPolicy {
    /// Picks an index into `options`, or `None` when nothing is playable.
    pub fn choose_card<R: Rng + ?Sized>(&self, options: &[Card], rng: &mut R) -> Option<usize> {
        if options.is_empty() {
            return None;
        }

        let index = match self {
            AiPolicy::FirstChoice => 0,
            AiPolicy::ActionPreferring => options
                .iter()
                .position(|card| card.action() != ActionKind::None)
                .unwrap_or_else(|| rng.gen_range(0..options.len())),
            AiPolicy::Random => rng.gen_range(0..options.len()),
        };
        Some(index)
    }

    pub fn choose_color<R: Rng + ?Sized>(&self, rng: &mut R) -> CardColor {
        match self {
            AiPolicy::FirstChoice => WILD_COLORS[0],
            AiPolicy::ActionPreferring | AiPolicy::Random => *WILD_COLORS
                .choose(rng)
                .expect("There is always a color to choose from."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn card(rank: u8, color: CardColor) -> Card {
        Card::colored(rank, color).unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn no_options_means_no_card() {
        for policy in [AiPolicy::FirstChoice, AiPolicy::ActionPreferring, AiPolicy::Random] {
            assert_eq!(policy.choose_card(&[], &mut rng()), None);
        }
    }

    #[test]
    fn first_choice_takes_first_card_and_red() {
        let options = [card(3, CardColor::Green), card(10, CardColor::Green)];
        assert_eq!(AiPolicy::FirstChoice.choose_card(&options, &mut rng()), Some(0));
        assert_eq!(AiPolicy::FirstChoice.choose_color(&mut rng()), CardColor::Red);
    }

    #[test]
    fn action_preferring_takes_first_action_card() {
        let options = [
            card(3, CardColor::Red),
            card(10, CardColor::Blue),
            card(3, CardColor::Green),
        ];
        assert_eq!(
            AiPolicy::ActionPreferring.choose_card(&options, &mut rng()),
            Some(1)
        );
    }

    #[test]
    fn action_preferring_counts_wild_cards_as_actions() {
        let options = [card(3, CardColor::Red), Card::wild(), card(12, CardColor::Red)];
        assert_eq!(
            AiPolicy::ActionPreferring.choose_card(&options, &mut rng()),
            Some(1)
        );
    }

    #[test]
    fn action_preferring_falls_back_to_any_match() {
        let options = [card(3, CardColor::Red), card(3, CardColor::Green)];
        let mut rng = rng();
        for _ in 0..20 {
            let index = AiPolicy::ActionPreferring
                .choose_card(&options, &mut rng)
                .unwrap();
            assert!(index < options.len());
        }
    }

    #[test]
    fn random_picks_every_option_eventually() {
        let options = [
            card(1, CardColor::Red),
            card(2, CardColor::Red),
            card(3, CardColor::Red),
        ];
        let mut seen = [false; 3];
        let mut rng = rng();
        for _ in 0..200 {
            seen[AiPolicy::Random.choose_card(&options, &mut rng).unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn parse_policy_names() {
        assert_eq!(AiPolicy::from_str("first-choice"), Ok(AiPolicy::FirstChoice));
        assert_eq!(
            AiPolicy::from_str("action-preferring"),
            Ok(AiPolicy::ActionPreferring)
        );
        assert_eq!(AiPolicy::from_str("random"), Ok(AiPolicy::Random));
        assert!(AiPolicy::from_str("clever").is_err());
        assert_eq!(AiPolicy::ActionPreferring.to_string(), "action-preferring");
    }
}
