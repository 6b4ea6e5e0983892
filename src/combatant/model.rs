//! Combatant record and derived attributes
//!
//! Combatants are ephemeral inputs to the engine: nothing here mutates or
//! stores one. Rating and legendary status are always derived from current
//! fields, never cached.

use serde::{Deserialize, Serialize};

/// Names that trigger the legendary combat override, matched case-insensitively.
pub const LEGENDARY_NAMES: [&str; 2] = ["Optimus Prime", "Predaking"];

/// Which side a combatant fights for. Fixed for the duration of a battle.
///
/// Wire encoding uses the single-letter codes of the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[serde(rename = "A")]
    Autobots,
    #[serde(rename = "D")]
    Decepticons,
}

impl Faction {
    /// Singular form used when naming one combatant ("Autobot Dumbo").
    pub fn member_name(self) -> &'static str {
        match self {
            Faction::Autobots => "Autobot",
            Faction::Decepticons => "Decepticon",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Autobots => write!(f, "Autobots"),
            Faction::Decepticons => write!(f, "Decepticons"),
        }
    }
}

/// One unit eligible to fight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    /// Absent only for a combatant that has never been persisted. Not an
    /// input to combat; only the sort tie-break and lookups read it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "team")]
    pub faction: Faction,
    /// Icon URL from the upstream record. Carried for the wire shape, ignored
    /// by the engine.
    #[serde(rename = "teamIcon", default, skip_serializing_if = "Option::is_none")]
    pub team_icon: Option<String>,
    pub rank: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub speed: i32,
    pub endurance: i32,
    pub courage: i32,
    pub firepower: i32,
    pub skill: i32,
}

impl Combatant {
    /// Overall rating: five of the seven stats. Courage and skill are
    /// deliberately excluded; they act as instant-decision thresholds in
    /// combat instead.
    ///
    /// Widened to i64 so the sum is defined for any stat values.
    pub fn rating(&self) -> i64 {
        i64::from(self.strength)
            + i64::from(self.intelligence)
            + i64::from(self.speed)
            + i64::from(self.endurance)
            + i64::from(self.firepower)
    }

    /// True for the reserved legendary names, whatever the stats say.
    pub fn is_legendary(&self) -> bool {
        LEGENDARY_NAMES.iter().any(|name| self.matches_name(name))
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn matches_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Display form including the faction, e.g. "Decepticon Dumdum".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.faction.member_name(), self.name)
    }
}
