//! Cybertron - Deterministic Transformer Combat Engine

pub mod battle;
pub mod combat;
pub mod combatant;
pub mod core;
