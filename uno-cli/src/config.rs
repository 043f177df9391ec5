use std::env::var;

use color_eyre::eyre::{Result, WrapErr};
use uno_engine::GameOptions;

pub const SEED_VAR: &str = "UNO_SEED";
pub const TURN_LIMIT_VAR: &str = "UNO_TURN_LIMIT";

/// Reads game options from `UNO_SEED` and `UNO_TURN_LIMIT`.
pub fn game_options_from_env() -> Result<GameOptions> {
    game_options(|key| var(key).ok())
}

fn game_options(lookup: impl Fn(&str) -> Option<String>) -> Result<GameOptions> {
    let mut options = GameOptions::default();

    if let Some(raw) = lookup(SEED_VAR) {
        let seed = raw
            .trim()
            .parse::<u64>()
            .wrap_err_with(|| format!("`{SEED_VAR}` must be an unsigned integer, got `{raw}`"))?;
        options = options.with_seed(seed);
    }

    if let Some(raw) = lookup(TURN_LIMIT_VAR) {
        let limit = raw.trim().parse::<u32>().wrap_err_with(|| {
            format!("`{TURN_LIMIT_VAR}` must be an unsigned integer, got `{raw}`")
        })?;
        options = options.with_turn_limit(limit);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn options(vars: &[(&str, &str)]) -> Result<GameOptions> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        game_options(|key| vars.get(key).cloned())
    }

    #[test]
    fn nothing_set_means_defaults() {
        assert_eq!(options(&[]).unwrap(), GameOptions::default());
    }

    #[test]
    fn seed_and_turn_limit_are_read() {
        let options = options(&[(SEED_VAR, "42"), (TURN_LIMIT_VAR, " 300 ")]).unwrap();
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.turn_limit, Some(300));
        assert_eq!(options.first_player, None);
    }

    #[test]
    fn bad_seed_is_reported() {
        let error = options(&[(SEED_VAR, "lucky")]).unwrap_err();
        assert!(error.to_string().contains(SEED_VAR));
    }
}
