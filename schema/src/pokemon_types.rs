use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elemental typing. Doubles as the category tag used to cap how many
/// members of one roster may share a type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    /// Stand-in for a species with no known typing. Counts toward the cap
    /// like any other type.
    #[strum(serialize = "???")]
    Typeless,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_type_names_parse_case_insensitively() {
        assert_eq!(PokemonType::from_str("fairy"), Ok(PokemonType::Fairy));
        assert_eq!(PokemonType::from_str("STEEL"), Ok(PokemonType::Steel));
        assert!(PokemonType::from_str("Sound").is_err());
    }

    #[test]
    fn test_all_types_present() {
        // Eighteen elemental types plus Typeless.
        assert_eq!(PokemonType::iter().count(), 19);
        assert_eq!(PokemonType::Dark.to_string(), "Dark");
        assert_eq!(PokemonType::Typeless.to_string(), "???");
    }
}
