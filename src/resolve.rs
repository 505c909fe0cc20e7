//! Resolution of value-or-list fields and move slots into concrete values.

use crate::rng::TeamRng;
use schema::OneOf;

/// Number of move slots drawn before the signature move is appended.
pub const DEFAULT_MOVE_CAP: usize = 3;

/// Resolve a value-or-list field. A fixed value is returned as is; a list
/// yields one entry chosen uniformly. Returns `None` only for an empty list.
pub fn resolve_choice<'a, T>(
    field: &'a OneOf<T>,
    rng: &mut impl TeamRng,
    reason: &str,
) -> Option<&'a T> {
    match field {
        OneOf::Fixed(value) => Some(value),
        OneOf::Alternatives(values) => rng.pick(values, reason),
    }
}

/// Draw up to `cap` move slots without replacement, resolve each, then
/// append the signature move. The slot list itself is left untouched.
///
/// A slot that is an empty list is consumed without producing a move.
pub fn resolve_moves(
    slots: &[OneOf<String>],
    signature_move: &str,
    cap: usize,
    rng: &mut impl TeamRng,
) -> Vec<String> {
    let mut remaining: Vec<&OneOf<String>> = slots.iter().collect();
    let mut moves = Vec::with_capacity(cap.min(slots.len()) + 1);

    while moves.len() < cap {
        let Some(slot) = rng.take(&mut remaining, "move slot") else {
            break;
        };
        if let Some(move_name) = resolve_choice(slot, rng, "move alternative") {
            moves.push(move_name.clone());
        }
    }

    moves.push(signature_move.to_string());
    moves
}
