use crate::{OneOf, StatOverrides};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "N")]
    Genderless,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn symbol(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Genderless => "N",
            Gender::Unspecified => "",
        }
    }
}

/// A staff member's set: the static catalog record the team generator draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSet {
    /// Species the set is built on; also the key for type lookups.
    pub species: String,
    pub ability: OneOf<String>,
    pub item: OneOf<String>,
    pub nature: OneOf<String>,
    #[serde(default)]
    pub gender: Gender,
    /// Move slots. A slot holding a list resolves to one of its entries.
    pub moves: Vec<OneOf<String>>,
    /// Always appended after the resolved move slots.
    pub signature_move: String,
    #[serde(default)]
    pub evs: Option<StatOverrides>,
    #[serde(default)]
    pub ivs: Option<StatOverrides>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub shiny: bool,
}

pub const DEFAULT_LEVEL: u8 = 100;

impl StaffSet {
    pub fn level(&self) -> u8 {
        self.level.unwrap_or(DEFAULT_LEVEL)
    }
}
