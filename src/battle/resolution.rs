//! Team-versus-team battle orchestration
//!
//! A battle partitions a mixed roster into factions, seeds each side by rank
//! then name, pairs the fronts of the two queues round by round, and tallies
//! casualties. Pure computation: no randomness, no I/O, no mutation of the
//! input roster. The same roster always produces the same result.

use crate::battle::result::{BattleOutcome, BattleResult, RoundRecord};
use crate::combat::{resolve_combat, CombatOutcome};
use crate::combatant::{battle_seeding, Combatant, Faction};
use crate::core::{BattleError, Result};

/// Run a battle over a mixed, unordered roster.
///
/// Partitions by faction itself, so the traitor invariant of
/// [`battle_between`] holds by construction and this entry never fails.
pub fn battle(roster: &[Combatant]) -> BattleResult {
    let autobots: Vec<Combatant> = roster
        .iter()
        .filter(|c| c.faction == Faction::Autobots)
        .cloned()
        .collect();
    let decepticons: Vec<Combatant> = roster
        .iter()
        .filter(|c| c.faction == Faction::Decepticons)
        .cloned()
        .collect();

    run_battle(autobots, decepticons)
}

/// Run a battle between two pre-split line-ups.
///
/// # Errors
///
/// Returns a traitor error when a combatant sits in the wrong line-up. That
/// is an assembly bug in the caller, not a battle outcome; callers that
/// partition via [`battle`] can never hit it.
pub fn battle_between(autobots: &[Combatant], decepticons: &[Combatant]) -> Result<BattleResult> {
    if autobots.iter().any(|c| c.faction == Faction::Decepticons) {
        return Err(BattleError::TraitorDecepticon);
    }
    if decepticons.iter().any(|c| c.faction == Faction::Autobots) {
        return Err(BattleError::TraitorAutobot);
    }

    Ok(run_battle(autobots.to_vec(), decepticons.to_vec()))
}

fn run_battle(mut autobots: Vec<Combatant>, mut decepticons: Vec<Combatant>) -> BattleResult {
    autobots.sort_by(battle_seeding);
    decepticons.sort_by(battle_seeding);

    let starting_autobots = autobots;
    let starting_decepticons = decepticons;

    tracing::debug!(
        autobots = starting_autobots.len(),
        decepticons = starting_decepticons.len(),
        "battle started"
    );

    if starting_autobots.is_empty() && starting_decepticons.is_empty() {
        return BattleResult {
            final_outcome: None,
            rounds: Vec::new(),
            starting_autobots,
            starting_decepticons,
            autobot_casualties: Vec::new(),
            decepticon_casualties: Vec::new(),
            autobot_survivors: Vec::new(),
            decepticon_survivors: Vec::new(),
        };
    }

    // Equalize the combat queues: the larger faction's lowest seeds advance
    // without fighting. They never appear in the round log.
    let rounds_to_fight = starting_autobots.len().min(starting_decepticons.len());
    let mut autobot_queue = starting_autobots.clone();
    let mut decepticon_queue = starting_decepticons.clone();
    let autobot_byes = autobot_queue.split_off(rounds_to_fight);
    let decepticon_byes = decepticon_queue.split_off(rounds_to_fight);

    let mut autobot_winners: Vec<Combatant> = Vec::new();
    let mut decepticon_winners: Vec<Combatant> = Vec::new();
    let mut autobot_casualties: Vec<Combatant> = Vec::new();
    let mut decepticon_casualties: Vec<Combatant> = Vec::new();
    let mut rounds: Vec<RoundRecord> = Vec::new();

    for (autobot, decepticon) in autobot_queue.into_iter().zip(decepticon_queue) {
        let outcome = match resolve_combat(&autobot, &decepticon) {
            CombatOutcome::Win => {
                autobot_winners.push(autobot.clone());
                decepticon_casualties.push(decepticon.clone());
                BattleOutcome::AutobotWin
            }
            CombatOutcome::Loss => {
                decepticon_winners.push(decepticon.clone());
                autobot_casualties.push(autobot.clone());
                BattleOutcome::DecepticonWin
            }
            CombatOutcome::Tie => {
                autobot_casualties.push(autobot.clone());
                decepticon_casualties.push(decepticon.clone());
                BattleOutcome::Tie
            }
            // no per-side accounting, everyone is wiped out below
            CombatOutcome::MutualDestruction => BattleOutcome::MutualDestruction,
        };

        tracing::trace!(
            round = rounds.len() + 1,
            autobot = %autobot.name,
            decepticon = %decepticon.name,
            ?outcome,
            "round resolved"
        );
        rounds.push(RoundRecord {
            autobot,
            decepticon,
            outcome,
        });

        if outcome == BattleOutcome::MutualDestruction {
            tracing::debug!(rounds = rounds.len(), "battle ended in mutual destruction");
            return BattleResult {
                final_outcome: Some(BattleOutcome::MutualDestruction),
                rounds,
                autobot_casualties: starting_autobots.clone(),
                decepticon_casualties: starting_decepticons.clone(),
                starting_autobots,
                starting_decepticons,
                autobot_survivors: Vec::new(),
                decepticon_survivors: Vec::new(),
            };
        }
    }

    // Casualty counts decide the battle; survivor counts would be skewed by
    // tie rounds, which cost both sides one combatant. An empty faction
    // forfeits: zero rounds leave the tally 0-0 and the non-empty side wins.
    let autobot_losses = autobot_casualties.len();
    let decepticon_losses = decepticon_casualties.len();
    let final_outcome = if autobot_losses < decepticon_losses || starting_decepticons.is_empty() {
        BattleOutcome::AutobotWin
    } else if autobot_losses > decepticon_losses || starting_autobots.is_empty() {
        BattleOutcome::DecepticonWin
    } else {
        BattleOutcome::Tie
    };

    tracing::debug!(
        ?final_outcome,
        rounds = rounds.len(),
        autobot_losses,
        decepticon_losses,
        "battle finished"
    );

    let autobot_survivors: Vec<Combatant> =
        autobot_winners.into_iter().chain(autobot_byes).collect();
    let decepticon_survivors: Vec<Combatant> = decepticon_winners
        .into_iter()
        .chain(decepticon_byes)
        .collect();

    BattleResult {
        final_outcome: Some(final_outcome),
        rounds,
        starting_autobots,
        starting_decepticons,
        autobot_casualties,
        decepticon_casualties,
        autobot_survivors,
        decepticon_survivors,
    }
}
