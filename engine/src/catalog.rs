//! Static game catalog
//!
//! One module per game; each exposes a `GAME: GameSpec` built from const
//! tables. All content is bundled, read-only data.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::records::GameSpec;

pub mod battles;
pub mod devolution;
pub mod foods;
pub mod inventions;
pub mod legislation;
pub mod places;
pub mod prime_ministers;
pub mod sports;

/// Every game shipped with the platform, in display order.
pub static GAMES: &[&GameSpec] = &[
    &battles::GAME,
    &legislation::GAME,
    &prime_ministers::GAME,
    &foods::GAME,
    &places::GAME,
    &devolution::GAME,
    &sports::GAME,
    &inventions::GAME,
];

static GAME_INDEX: Lazy<HashMap<&'static str, &'static GameSpec>> =
    Lazy::new(|| GAMES.iter().map(|g| (g.key, *g)).collect());

pub fn all_games() -> &'static [&'static GameSpec] {
    GAMES
}

pub fn find_game(key: &str) -> Option<&'static GameSpec> {
    GAME_INDEX.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_well_formed() {
        for game in all_games() {
            game.validate().unwrap_or_else(|e| panic!("{e}"));
        }
    }

    #[test]
    fn test_game_keys_are_unique() {
        assert_eq!(GAME_INDEX.len(), GAMES.len());
    }

    #[test]
    fn test_find_game() {
        assert!(find_game("battles").is_some());
        assert!(find_game("no-such-game").is_none());
    }

    #[test]
    fn test_battles_matches_documented_shape() {
        // The battles game is the canonical example: 21 records, Trafalgar at id 10.
        let battles = find_game("battles").unwrap();
        assert_eq!(battles.records.len(), 21);
        let trafalgar = battles.record(crate::records::RecordId(10)).unwrap();
        assert!(trafalgar.facets[0].contains("Trafalgar"));
    }
}
