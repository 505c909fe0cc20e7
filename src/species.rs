use crate::errors::{CatalogError, CatalogResult};
use schema::PokemonType;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

const BUNDLED_SPECIES: &str = include_str!("../data/species.ron");

/// Normalise a display name into a lookup key: ASCII letters and digits
/// only, lower-cased. `"Farfetch'd"` and `"farfetchd"` share a key.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Source of a species' category tags (its typing).
pub trait CategoryLookup {
    /// The types for `species`, or `None` if the species is unknown.
    fn types_of(&self, species: &str) -> Option<Vec<PokemonType>>;
}

impl<F> CategoryLookup for F
where
    F: Fn(&str) -> Option<Vec<PokemonType>>,
{
    fn types_of(&self, species: &str) -> Option<Vec<PokemonType>> {
        self(species)
    }
}

/// Species typing table loaded from RON content.
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    types: HashMap<String, Vec<PokemonType>>,
}

impl SpeciesTable {
    pub fn from_entries<S: AsRef<str>>(
        entries: impl IntoIterator<Item = (S, Vec<PokemonType>)>,
    ) -> Self {
        let types = entries
            .into_iter()
            .map(|(name, types)| (to_id(name.as_ref()), types))
            .collect();
        Self { types }
    }

    pub fn from_ron_str(source: &str) -> CatalogResult<Self> {
        let entries: BTreeMap<String, Vec<PokemonType>> =
            ron::from_str(source).map_err(|source| CatalogError::Parse {
                what: "species table".to_string(),
                source,
            })?;
        Ok(Self::from_entries(entries))
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// The species table shipped with the crate.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_ron_str(BUNDLED_SPECIES)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl CategoryLookup for SpeciesTable {
    fn types_of(&self, species: &str) -> Option<Vec<PokemonType>> {
        self.types.get(&to_id(species)).cloned()
    }
}
