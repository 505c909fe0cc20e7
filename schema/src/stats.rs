use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub fn short_name(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::Spa => "SpA",
            Stat::Spd => "SpD",
            Stat::Spe => "Spe",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A complete six-stat spread (EVs or IVs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl StatTable {
    /// A table with every stat set to `value`.
    pub const fn uniform(value: u8) -> Self {
        StatTable {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    pub fn total(&self) -> u16 {
        Stat::iter().map(|stat| self.get(stat) as u16).sum()
    }
}

impl fmt::Display for StatTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Stat::iter()
            .map(|stat| format!("{} {}", self.get(stat), stat))
            .collect();
        write!(f, "{}", parts.join(" / "))
    }
}

/// A partial stat spread as written in a staff set, e.g. `{hp: 252, spe: 252}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatOverrides(pub BTreeMap<Stat, u8>);

impl StatOverrides {
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        self.0.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn get(&self, stat: Stat) -> Option<u8> {
        self.0.get(&stat).copied()
    }
}

impl<const N: usize> From<[(Stat, u8); N]> for StatOverrides {
    fn from(entries: [(Stat, u8); N]) -> Self {
        StatOverrides(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_parse_lowercase_keys() {
        let parsed: StatOverrides = ron::from_str("{hp: 252, spe: 252}").unwrap();
        assert_eq!(parsed.get(Stat::Hp), Some(252));
        assert_eq!(parsed.get(Stat::Spe), Some(252));
        assert_eq!(parsed.get(Stat::Atk), None);
    }

    #[test]
    fn test_table_get_set_and_display() {
        let mut table = StatTable::uniform(0);
        table.set(Stat::Spa, 252);
        table.set(Stat::Spe, 4);
        assert_eq!(table.get(Stat::Spa), 252);
        assert_eq!(table.total(), 256);
        assert_eq!(table.to_string(), "0 HP / 0 Atk / 0 Def / 252 SpA / 0 SpD / 4 Spe");
    }
}
