//! Random Staff Bros team generation.
//!
//! A roster is built by drawing staff sets without replacement, skipping any
//! whose typing would push a type past the cap, and resolving every accepted
//! set into concrete values.

use crate::catalog::{Catalog, TypeExceptions};
use crate::constraints::{TypeTracker, DEFAULT_TYPE_CAP};
use crate::errors::{CatalogError, CatalogResult};
use crate::resolve::{resolve_choice, resolve_moves, DEFAULT_MOVE_CAP};
use crate::rng::TeamRng;
use crate::sampler::CandidatePool;
use crate::species::{CategoryLookup, SpeciesTable};
use crate::stats::{resolve_evs, resolve_ivs};
use schema::{Gender, PokemonType, StaffSet, StatTable, DEFAULT_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_TEAM_SIZE: usize = 6;

/// A fully resolved team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Name of the staff set this member came from. Signature moves are only
    /// usable by the member carrying the owning name.
    pub name: String,
    pub species: String,
    pub item: String,
    pub ability: String,
    pub nature: String,
    pub gender: Gender,
    /// Resolved move slots followed by the signature move, which is always last.
    pub moves: Vec<String>,
    pub evs: StatTable,
    pub ivs: StatTable,
    pub level: u8,
    pub shiny: bool,
}

impl RosterEntry {
    pub fn signature_move(&self) -> Option<&str> {
        self.moves.last().map(String::as_str)
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.species)?;
        if self.gender != Gender::Unspecified {
            write!(f, " ({})", self.gender.symbol())?;
        }
        writeln!(f, " @ {}", self.item)?;
        writeln!(f, "Ability: {}", self.ability)?;
        if self.level != DEFAULT_LEVEL {
            writeln!(f, "Level: {}", self.level)?;
        }
        if self.shiny {
            writeln!(f, "Shiny: Yes")?;
        }
        writeln!(f, "EVs: {}", self.evs)?;
        writeln!(f, "{} Nature", self.nature)?;
        writeln!(f, "IVs: {}", self.ivs)?;
        for (i, move_name) in self.moves.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}", move_name)?;
        }
        Ok(())
    }
}

/// Force one named set into the roster when it reaches a given size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedPick {
    /// Roster length at which the forced name replaces the random draw.
    pub slot: usize,
    pub name: String,
}

/// Knobs for one roster build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamOptions {
    pub team_size: usize,
    /// Most members allowed to share a type.
    pub type_cap: u8,
    /// Move slots drawn per member before the signature move.
    pub move_cap: usize,
    pub forced: Option<ForcedPick>,
    /// Names removed from the pool before drawing starts.
    pub excluded: Vec<String>,
}

impl Default for TeamOptions {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            type_cap: DEFAULT_TYPE_CAP,
            move_cap: DEFAULT_MOVE_CAP,
            forced: None,
            excluded: Vec::new(),
        }
    }
}

impl TeamOptions {
    pub fn from_ron_str(source: &str) -> CatalogResult<Self> {
        ron::from_str(source).map_err(|source| CatalogError::Parse {
            what: "team options".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    pub fn force(mut self, slot: usize, name: impl Into<String>) -> Self {
        self.forced = Some(ForcedPick {
            slot,
            name: name.into(),
        });
        self
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }
}

/// Build a random roster from `catalog`.
///
/// Never fails: if the pool runs dry before `team_size` members are accepted
/// the shorter roster is returned. Every draw consumes its candidate, so the
/// loop runs at most once per catalog entry.
pub fn build_roster(
    catalog: &Catalog,
    lookup: &impl CategoryLookup,
    options: &TeamOptions,
    rng: &mut impl TeamRng,
) -> Vec<RosterEntry> {
    let mut pool = CandidatePool::new(catalog.names());
    for name in &options.excluded {
        pool.take_named(name);
    }
    let mut tracker = TypeTracker::new(options.type_cap);
    let mut roster = Vec::with_capacity(options.team_size);

    while !pool.is_empty() && roster.len() < options.team_size {
        let Some(name) = next_candidate(&mut pool, roster.len(), options, rng) else {
            break;
        };
        let Some(set) = catalog.get(name) else {
            continue;
        };

        let types = candidate_types(name, set, catalog.type_exceptions(), lookup);
        if !tracker.can_accept(&types) {
            debug!(set = name, ?types, cap = tracker.cap(), "rejected: type cap reached");
            continue;
        }

        let Some(entry) = resolve_entry(name, set, options.move_cap, rng) else {
            warn!(set = name, "skipping set with an empty list of alternatives");
            continue;
        };
        tracker.accept(&types);
        debug!(set = name, ?types, slot = roster.len(), "accepted");
        roster.push(entry);
    }

    if roster.len() < options.team_size {
        info!(
            size = roster.len(),
            wanted = options.team_size,
            "candidate pool exhausted before the roster was full"
        );
    } else {
        info!(size = roster.len(), "roster built");
    }
    roster
}

/// Build a default-sized roster from the bundled catalog and species table.
pub fn random_staff_team(rng: &mut impl TeamRng) -> CatalogResult<Vec<RosterEntry>> {
    let catalog = Catalog::bundled()?;
    let species = SpeciesTable::bundled()?;
    Ok(build_roster(&catalog, &species, &TeamOptions::default(), rng))
}

fn next_candidate<'a>(
    pool: &mut CandidatePool<'a>,
    filled: usize,
    options: &TeamOptions,
    rng: &mut impl TeamRng,
) -> Option<&'a str> {
    if let Some(forced) = options.forced.as_ref().filter(|f| f.slot == filled) {
        if let Some(name) = pool.take_named(&forced.name) {
            debug!(set = name, slot = filled, "forced pick");
            return Some(name);
        }
    }
    pool.draw(rng)
}

/// The tags a set competes under: its exception entry if it has one,
/// otherwise the typing of its species, or `Typeless` for an unknown species.
fn candidate_types(
    name: &str,
    set: &StaffSet,
    exceptions: &TypeExceptions,
    lookup: &impl CategoryLookup,
) -> Vec<PokemonType> {
    if let Some(types) = exceptions.get(name) {
        return types.to_vec();
    }
    lookup.types_of(&set.species).unwrap_or_else(|| {
        warn!(set = name, species = %set.species, "unknown species, counted as typeless");
        vec![PokemonType::Typeless]
    })
}

fn resolve_entry(
    name: &str,
    set: &StaffSet,
    move_cap: usize,
    rng: &mut impl TeamRng,
) -> Option<RosterEntry> {
    let item = resolve_choice(&set.item, rng, "item")?.clone();
    let ability = resolve_choice(&set.ability, rng, "ability")?.clone();
    let nature = resolve_choice(&set.nature, rng, "nature")?.clone();
    let moves = resolve_moves(&set.moves, &set.signature_move, move_cap, rng);

    Some(RosterEntry {
        name: name.to_string(),
        species: set.species.clone(),
        item,
        ability,
        nature,
        gender: set.gender,
        moves,
        evs: resolve_evs(set.evs.as_ref()),
        ivs: resolve_ivs(set.ivs.as_ref()),
        level: set.level(),
        shiny: set.shiny,
    })
}
