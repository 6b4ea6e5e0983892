//! Head-to-head combat resolution

pub mod constants;
pub mod resolution;

pub use constants::*;
pub use resolution::{resolve_combat, CombatOutcome};
