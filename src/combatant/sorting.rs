//! Deterministic combatant ordering
//!
//! One comparator serves both list display and battle seeding. Every chain of
//! criteria ends with an id tie-break, so the resulting order is total: equal
//! rank and equal name never leave two combatants interchangeable.

use std::cmp::Ordering;

use super::{Combatant, Faction};

/// One sort key. Criteria are evaluated left to right; a later criterion only
/// applies when all earlier ones compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Name,
    NameDescending,
    Faction,
    FactionDescending,
    Rank,
    RankDescending,
    Rating,
    RatingDescending,
}

/// Ascending faction order puts Autobots first.
fn faction_order(faction: Faction) -> u8 {
    match faction {
        Faction::Autobots => 0,
        Faction::Decepticons => 1,
    }
}

/// Compare two combatants by a criteria chain, falling back to id.
///
/// Combatants with an id order before those without; two missing ids compare
/// equal (nothing left to distinguish them).
pub fn compare_by_criteria(criteria: &[SortCriterion], a: &Combatant, b: &Combatant) -> Ordering {
    for criterion in criteria {
        let (ordering, descending) = match criterion {
            SortCriterion::Name => (a.name.cmp(&b.name), false),
            SortCriterion::NameDescending => (a.name.cmp(&b.name), true),
            SortCriterion::Faction => {
                (faction_order(a.faction).cmp(&faction_order(b.faction)), false)
            }
            SortCriterion::FactionDescending => {
                (faction_order(a.faction).cmp(&faction_order(b.faction)), true)
            }
            SortCriterion::Rank => (a.rank.cmp(&b.rank), false),
            SortCriterion::RankDescending => (a.rank.cmp(&b.rank), true),
            SortCriterion::Rating => (a.rating().cmp(&b.rating()), false),
            SortCriterion::RatingDescending => (a.rating().cmp(&b.rating()), true),
        };

        let ordering = if descending { ordering.reverse() } else { ordering };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    match (&a.id, &b.id) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a_id), Some(b_id)) => a_id.cmp(b_id),
        (None, None) => Ordering::Equal,
    }
}

/// The battle seeding order: rank descending, then name, then id.
///
/// Seeding decides both who fights whom and which excess combatants on the
/// larger side advance without fighting, so it must never change casually.
pub fn battle_seeding(a: &Combatant, b: &Combatant) -> Ordering {
    compare_by_criteria(&[SortCriterion::RankDescending, SortCriterion::Name], a, b)
}
