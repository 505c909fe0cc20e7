// Staff Bros Schema - Shared type definitions
// This crate contains the data definitions shared between the team generator
// library, its command-line front end and the RON content files.

// Re-export the main types
pub use choice::*;
pub use pokemon_types::*;
pub use staff_set::*;
pub use stats::*;

pub mod choice;
pub mod pokemon_types;
pub mod staff_set;
pub mod stats;
