//! Battle outcome types
//!
//! Everything a presentation layer is handed about a finished battle. All of
//! it is immutable once produced; the round log keeps its fight order.

use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;

/// Aggregate, team-level outcome of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    AutobotWin,
    DecepticonWin,
    Tie,
    /// Two legendaries met in a round; both full rosters are wiped out.
    MutualDestruction,
}

/// One resolved pairing within a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub autobot: Combatant,
    pub decepticon: Combatant,
    pub outcome: BattleOutcome,
}

/// Full accounting of a battle computation.
///
/// Starting rosters are in post-seeding order (rank descending, then name).
/// Survivor lists hold winners in the order their wins occurred, followed by
/// any combatants that advanced without fighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    /// `None` only when both factions started empty.
    pub final_outcome: Option<BattleOutcome>,
    pub rounds: Vec<RoundRecord>,
    pub starting_autobots: Vec<Combatant>,
    pub starting_decepticons: Vec<Combatant>,
    pub autobot_casualties: Vec<Combatant>,
    pub decepticon_casualties: Vec<Combatant>,
    pub autobot_survivors: Vec<Combatant>,
    pub decepticon_survivors: Vec<Combatant>,
}

impl BattleResult {
    /// Rounds actually fought. On mutual destruction this is the 1-based
    /// index of the destruction round.
    pub fn rounds_fought(&self) -> usize {
        self.rounds.len()
    }
}
