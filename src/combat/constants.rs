//! Combat tuning thresholds

/// Courage gap that decides a fight outright.
pub const COURAGE_WIN_MARGIN: i64 = 4;

/// Strength gap that decides a fight outright.
pub const STRENGTH_WIN_MARGIN: i64 = 3;

/// Skill gap that decides a fight outright.
pub const SKILL_WIN_MARGIN: i64 = 3;
