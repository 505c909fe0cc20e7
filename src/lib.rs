// In: src/lib.rs

//! Staff Bros Team Generator
//!
//! Builds random six-member rosters from a catalog of hand-written staff
//! sets, capping how many members may share a type and resolving each set's
//! alternative items, abilities, natures and moves. All randomness comes from
//! a caller-supplied RNG so rosters are reproducible from a seed.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod constraints;
pub mod errors;
pub mod resolve;
pub mod rng;
pub mod sampler;
pub mod species;
pub mod stats;
pub mod teams;

#[cfg(test)]
pub(crate) mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Gender, OneOf, PokemonType, StaffSet, Stat, StatOverrides, StatTable};

// --- From this crate's modules (`src/`) ---

// Team generation entry points.
pub use teams::{build_roster, random_staff_team, ForcedPick, RosterEntry, TeamOptions};

// Content and lookups.
pub use catalog::{Catalog, TypeExceptions};
pub use species::{CategoryLookup, SpeciesTable};

// Randomness.
pub use rng::{SeededRng, TeamRng};

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult, ValidationError};
