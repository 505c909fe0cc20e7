use schema::PokemonType;
use std::collections::HashMap;

/// Most roster members allowed to share any one type.
pub const DEFAULT_TYPE_CAP: u8 = 3;

/// Per-type counts for one roster build.
#[derive(Debug, Clone)]
pub struct TypeTracker {
    cap: u8,
    counts: HashMap<PokemonType, u8>,
}

impl Default for TypeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TYPE_CAP)
    }
}

impl TypeTracker {
    pub fn new(cap: u8) -> Self {
        Self {
            cap,
            counts: HashMap::new(),
        }
    }

    pub fn cap(&self) -> u8 {
        self.cap
    }

    /// How many accepted members carry `ty` so far.
    pub fn count(&self, ty: PokemonType) -> u8 {
        self.counts.get(&ty).copied().unwrap_or(0)
    }

    /// True if every type in `types` is still below the cap.
    pub fn can_accept(&self, types: &[PokemonType]) -> bool {
        types.iter().all(|&ty| self.count(ty) < self.cap)
    }

    /// Count one more member for each type. Duplicate entries in `types`
    /// count once.
    pub fn accept(&mut self, types: &[PokemonType]) {
        for (i, &ty) in types.iter().enumerate() {
            if types[..i].contains(&ty) {
                continue;
            }
            *self.counts.entry(ty).or_insert(0) += 1;
        }
    }
}
