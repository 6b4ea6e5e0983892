//! Combatant data model and ordering

pub mod model;
pub mod sorting;

pub use model::{Combatant, Faction, LEGENDARY_NAMES};
pub use sorting::{battle_seeding, compare_by_criteria, SortCriterion};
