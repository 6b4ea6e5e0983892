//! Battle system - team-versus-team tournaments built from single combats

pub mod resolution;
pub mod result;

pub use resolution::{battle, battle_between};
pub use result::{BattleOutcome, BattleResult, RoundRecord};
