use crate::catalog::{Catalog, TypeExceptions};
use crate::species::SpeciesTable;
use schema::{Gender, OneOf, PokemonType, StaffSet, Stat, StatOverrides};

pub(crate) use crate::rng::ScriptedRng;

/// A builder for staff sets with plain defaults.
///
/// # Example
/// ```
/// let set = TestSetBuilder::new("Gengar")
///     .moves(vec!["Hex".into(), "Sludge Wave".into()])
///     .signature("Lucid Dreams")
///     .build();
/// ```
pub struct TestSetBuilder {
    set: StaffSet,
}

impl TestSetBuilder {
    pub fn new(species: &str) -> Self {
        Self {
            set: StaffSet {
                species: species.to_string(),
                ability: OneOf::from("Pressure"),
                item: OneOf::from("Leftovers"),
                nature: OneOf::from("Hardy"),
                gender: Gender::Unspecified,
                moves: vec![OneOf::from("Tackle"), OneOf::from("Growl")],
                signature_move: "Signature Move".to_string(),
                evs: None,
                ivs: None,
                level: None,
                shiny: false,
            },
        }
    }

    pub fn ability(mut self, ability: impl Into<OneOf<String>>) -> Self {
        self.set.ability = ability.into();
        self
    }

    pub fn item(mut self, item: impl Into<OneOf<String>>) -> Self {
        self.set.item = item.into();
        self
    }

    pub fn nature(mut self, nature: impl Into<OneOf<String>>) -> Self {
        self.set.nature = nature.into();
        self
    }

    pub fn moves(mut self, moves: Vec<OneOf<String>>) -> Self {
        self.set.moves = moves;
        self
    }

    pub fn signature(mut self, signature_move: &str) -> Self {
        self.set.signature_move = signature_move.to_string();
        self
    }

    pub fn evs<const N: usize>(mut self, evs: [(Stat, u8); N]) -> Self {
        self.set.evs = Some(StatOverrides::from(evs));
        self
    }

    pub fn ivs<const N: usize>(mut self, ivs: [(Stat, u8); N]) -> Self {
        self.set.ivs = Some(StatOverrides::from(ivs));
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.set.level = Some(level);
        self
    }

    pub fn shiny(mut self) -> Self {
        self.set.shiny = true;
        self
    }

    pub fn build(self) -> StaffSet {
        self.set
    }
}

/// Builds an unvalidated catalog from `(name, set)` pairs.
pub fn catalog_of(sets: Vec<(&str, StaffSet)>, type_exceptions: TypeExceptions) -> Catalog {
    Catalog::from_sets(
        sets.into_iter().map(|(name, set)| (name.to_string(), set)),
        type_exceptions,
    )
}

/// Builds a species table from `(species, types)` pairs.
pub fn species_of(entries: Vec<(&str, Vec<PokemonType>)>) -> SpeciesTable {
    SpeciesTable::from_entries(entries)
}

/// The types a roster member competed under, computed independently of the builder.
pub fn effective_types(
    catalog: &Catalog,
    species: &SpeciesTable,
    name: &str,
) -> Vec<PokemonType> {
    use crate::species::CategoryLookup;

    if let Some(types) = catalog.type_exceptions().get(name) {
        return types.to_vec();
    }
    catalog
        .get(name)
        .and_then(|set| species.types_of(&set.species))
        .unwrap_or_else(|| vec![PokemonType::Typeless])
}
