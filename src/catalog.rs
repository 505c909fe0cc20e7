//! The staff-set catalog: every set the team generator can draw from, plus
//! the per-set type exceptions.

use crate::errors::{CatalogError, CatalogResult, ValidationError};
use crate::species::to_id;
use crate::stats::{MAX_EV, MAX_IV};
use schema::{OneOf, PokemonType, StaffSet, StatOverrides};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUNDLED_SETS: &str = include_str!("../data/staff_sets.ron");

/// Sets whose effective typing differs from the typing of their species.
/// Consulted before the species lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeExceptions(BTreeMap<String, Vec<PokemonType>>);

impl TypeExceptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, types: Vec<PokemonType>) {
        self.0.insert(name.into(), types);
    }

    pub fn get(&self, name: &str) -> Option<&[PokemonType]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PokemonType])> {
        self.0
            .iter()
            .map(|(name, types)| (name.as_str(), types.as_slice()))
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    sets: BTreeMap<String, StaffSet>,
    #[serde(default)]
    type_exceptions: TypeExceptions,
}

/// An immutable, name-ordered collection of staff sets.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: BTreeMap<String, StaffSet>,
    type_exceptions: TypeExceptions,
}

impl Catalog {
    /// Build a catalog from sets constructed in code. No validation is run;
    /// call [`Catalog::validate`] to check the content rules.
    pub fn from_sets(
        sets: impl IntoIterator<Item = (String, StaffSet)>,
        type_exceptions: TypeExceptions,
    ) -> Self {
        Self {
            sets: sets.into_iter().collect(),
            type_exceptions,
        }
    }

    /// Parse and validate a catalog from RON content.
    pub fn from_ron_str(source: &str) -> CatalogResult<Self> {
        let file: CatalogFile = ron::from_str(source).map_err(|source| CatalogError::Parse {
            what: "staff set catalog".to_string(),
            source,
        })?;
        let catalog = Self {
            sets: file.sets,
            type_exceptions: file.type_exceptions,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_ron_str(BUNDLED_SETS)
    }

    pub fn get(&self, name: &str) -> Option<&StaffSet> {
        self.sets.get(name)
    }

    /// Set names in catalog order. This order is part of what makes a
    /// seeded build reproducible.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn sets(&self) -> impl Iterator<Item = (&str, &StaffSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn type_exceptions(&self) -> &TypeExceptions {
        &self.type_exceptions
    }

    /// Names of every set that carries `move_name` as its signature move,
    /// in catalog order. Several sets may share one, typically a standard
    /// move used as the base of a custom Z-move. Move names are compared by
    /// id, so case and punctuation are ignored.
    pub fn signature_owners(&self, move_name: &str) -> Vec<&str> {
        let wanted = to_id(move_name);
        self.sets
            .iter()
            .filter(|(_, set)| to_id(&set.signature_move) == wanted)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether a member carrying `name` may use `move_name`. Moves that are
    /// nobody's signature are unrestricted.
    pub fn is_signature_authorized(&self, name: &str, move_name: &str) -> bool {
        let owners = self.signature_owners(move_name);
        owners.is_empty() || owners.contains(&name)
    }

    /// Check every content rule, returning the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sets.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }

        for (name, set) in &self.sets {
            validate_set(name, set)?;
        }

        for (name, types) in self.type_exceptions.iter() {
            if !self.sets.contains_key(name) {
                return Err(ValidationError::UnknownExceptionSet(name.to_string()));
            }
            if types.is_empty() {
                return Err(ValidationError::EmptyExceptionTypes(name.to_string()));
            }
        }

        Ok(())
    }
}

fn validate_set(name: &str, set: &StaffSet) -> Result<(), ValidationError> {
    let fields = [
        ("ability", &set.ability),
        ("item", &set.item),
        ("nature", &set.nature),
    ];
    for (field, value) in fields {
        require_options(name, field, value)?;
    }

    for (i, slot) in set.moves.iter().enumerate() {
        let field = format!("move slot {}", i + 1);
        require_options(name, &field, slot)?;
        if slot.options().iter().any(|m| m.trim().is_empty()) {
            return Err(ValidationError::BlankMove {
                set: name.to_string(),
                field,
            });
        }
    }
    if set.signature_move.trim().is_empty() {
        return Err(ValidationError::BlankMove {
            set: name.to_string(),
            field: "signature_move".to_string(),
        });
    }

    if let Some(level) = set.level {
        if level == 0 || level > 100 {
            return Err(ValidationError::InvalidLevel {
                set: name.to_string(),
                level,
            });
        }
    }

    if let Some(evs) = &set.evs {
        check_spread(evs, MAX_EV, |stat, value| ValidationError::EvOutOfRange {
            set: name.to_string(),
            stat,
            value,
            max: MAX_EV,
        })?;
    }
    if let Some(ivs) = &set.ivs {
        check_spread(ivs, MAX_IV, |stat, value| ValidationError::IvOutOfRange {
            set: name.to_string(),
            stat,
            value,
            max: MAX_IV,
        })?;
    }

    Ok(())
}

fn require_options(
    name: &str,
    field: &str,
    value: &OneOf<String>,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyAlternatives {
            set: name.to_string(),
            field: field.to_string(),
        });
    }
    Ok(())
}

fn check_spread(
    spread: &StatOverrides,
    max: u8,
    error: impl Fn(String, u8) -> ValidationError,
) -> Result<(), ValidationError> {
    match spread.iter().find(|&(_, value)| value > max) {
        Some((stat, value)) => Err(error(stat.to_string(), value)),
        None => Ok(()),
    }
}
