//! Pairing resolution rules
//!
//! One ordered rule chain decides every pairing. Legendary names override all
//! numbers; a large enough gap in courage, strength, or skill overrides the
//! rating sum; rating settles the remaining cases. Rule order is load
//! bearing: courage is checked before strength, strength before skill.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{COURAGE_WIN_MARGIN, SKILL_WIN_MARGIN, STRENGTH_WIN_MARGIN};
use crate::combatant::Combatant;

/// Outcome of one combatant against one opponent, read from the first
/// combatant's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    Win,
    Loss,
    Tie,
    /// Two legendaries met; both are destroyed.
    MutualDestruction,
}

/// Widened difference, defined for any pair of stat values.
fn gap(a: i32, b: i32) -> i64 {
    i64::from(a) - i64::from(b)
}

/// Resolve a single pairing.
///
/// Total over all stat inputs and free of side effects. No faction semantics:
/// any two combatants can be compared, sparring partners included.
pub fn resolve_combat(a: &Combatant, b: &Combatant) -> CombatOutcome {
    if a.is_legendary() && b.is_legendary() {
        return CombatOutcome::MutualDestruction;
    }
    if a.is_legendary() {
        return CombatOutcome::Win;
    }
    if b.is_legendary() {
        return CombatOutcome::Loss;
    }

    if gap(a.courage, b.courage) >= COURAGE_WIN_MARGIN {
        return CombatOutcome::Win;
    }
    if gap(a.strength, b.strength) >= STRENGTH_WIN_MARGIN {
        return CombatOutcome::Win;
    }
    if gap(a.skill, b.skill) >= SKILL_WIN_MARGIN {
        return CombatOutcome::Win;
    }
    if gap(a.courage, b.courage) <= -COURAGE_WIN_MARGIN {
        return CombatOutcome::Loss;
    }
    if gap(a.strength, b.strength) <= -STRENGTH_WIN_MARGIN {
        return CombatOutcome::Loss;
    }
    if gap(a.skill, b.skill) <= -SKILL_WIN_MARGIN {
        return CombatOutcome::Loss;
    }

    match a.rating().cmp(&b.rating()) {
        std::cmp::Ordering::Greater => CombatOutcome::Win,
        std::cmp::Ordering::Less => CombatOutcome::Loss,
        std::cmp::Ordering::Equal => CombatOutcome::Tie,
    }
}
