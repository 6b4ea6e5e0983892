//! Battle engine integration tests

use cybertron::battle::{battle, battle_between, BattleOutcome};
use cybertron::combatant::{Combatant, Faction};
use cybertron::core::BattleError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn combatant(
    id: &str,
    name: &str,
    faction: Faction,
    rank: i32,
    stats: [i32; 7],
) -> Combatant {
    let [strength, intelligence, speed, endurance, courage, firepower, skill] = stats;
    Combatant {
        id: Some(id.to_string()),
        name: name.to_string(),
        faction,
        team_icon: None,
        rank,
        strength,
        intelligence,
        speed,
        endurance,
        courage,
        firepower,
        skill,
    }
}

#[test]
fn test_full_battle_flow() {
    init_tracing();

    // Mixed roster, deliberately out of order. Seeding pairs Jazz with
    // Starscream and Bumblebee with Ravage; Cliffjumper sits out.
    let roster = vec![
        combatant("a3", "Cliffjumper", Faction::Autobots, 2, [6, 6, 6, 6, 6, 6, 6]),
        combatant("d1", "Starscream", Faction::Decepticons, 9, [6, 6, 6, 6, 5, 6, 6]),
        combatant("a1", "Jazz", Faction::Autobots, 8, [5, 9, 7, 7, 9, 5, 9]),
        combatant("d2", "Ravage", Faction::Decepticons, 5, [4, 8, 5, 6, 4, 7, 10]),
        combatant("a2", "Bumblebee", Faction::Autobots, 7, [2, 8, 4, 7, 7, 1, 7]),
    ];

    let result = battle(&roster);

    let starting: Vec<&str> = result.starting_autobots.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(starting, ["Jazz", "Bumblebee", "Cliffjumper"]);

    // Round 1: Jazz's courage 9 vs Starscream's 5 is an instant decision.
    // Round 2: Ravage's skill 10 vs Bumblebee's 7 is one as well.
    assert_eq!(result.rounds.len(), 2);
    assert_eq!(result.rounds[0].autobot.name, "Jazz");
    assert_eq!(result.rounds[0].decepticon.name, "Starscream");
    assert_eq!(result.rounds[0].outcome, BattleOutcome::AutobotWin);
    assert_eq!(result.rounds[1].autobot.name, "Bumblebee");
    assert_eq!(result.rounds[1].decepticon.name, "Ravage");
    assert_eq!(result.rounds[1].outcome, BattleOutcome::DecepticonWin);

    // One casualty each: the battle is a tie even though the Autobots
    // outnumber the survivors thanks to Cliffjumper's bye.
    assert_eq!(result.final_outcome, Some(BattleOutcome::Tie));

    let autobot_survivors: Vec<&str> =
        result.autobot_survivors.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(autobot_survivors, ["Jazz", "Cliffjumper"]);

    let decepticon_survivors: Vec<&str> =
        result.decepticon_survivors.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(decepticon_survivors, ["Ravage"]);

    assert_eq!(result.autobot_casualties[0].name, "Bumblebee");
    assert_eq!(result.decepticon_casualties[0].name, "Starscream");
}

#[test]
fn test_legendary_ends_everything() {
    init_tracing();

    let roster = vec![
        combatant("a1", "Optimus Prime", Faction::Autobots, 10, [10, 10, 8, 10, 10, 8, 10]),
        combatant("a2", "Jazz", Faction::Autobots, 8, [5, 9, 7, 7, 9, 5, 9]),
        combatant("d1", "Predaking", Faction::Decepticons, 10, [10, 5, 8, 9, 9, 9, 8]),
        combatant("d2", "Ravage", Faction::Decepticons, 5, [5, 8, 5, 6, 4, 7, 10]),
    ];

    let result = battle(&roster);

    assert_eq!(result.final_outcome, Some(BattleOutcome::MutualDestruction));
    assert_eq!(result.rounds.len(), 1);

    // everyone falls, the unfought pairing included
    assert_eq!(result.autobot_casualties.len(), 2);
    assert_eq!(result.decepticon_casualties.len(), 2);
    assert!(result.autobot_survivors.is_empty());
    assert!(result.decepticon_survivors.is_empty());
}

#[test]
fn test_strict_entry_flags_misfiled_combatant() {
    let autobots = vec![
        combatant("a1", "Jazz", Faction::Autobots, 8, [5, 9, 7, 7, 9, 5, 9]),
        combatant("d2", "Ravage", Faction::Decepticons, 5, [5, 8, 5, 6, 4, 7, 10]),
    ];
    let decepticons = vec![combatant(
        "d1",
        "Starscream",
        Faction::Decepticons,
        9,
        [6, 6, 6, 6, 5, 6, 6],
    )];

    assert_eq!(
        battle_between(&autobots, &decepticons),
        Err(BattleError::TraitorDecepticon)
    );

    // the primary entry point partitions for itself and cannot misfile
    let mut roster = autobots;
    roster.extend(decepticons);
    let result = battle(&roster);
    assert!(result.final_outcome.is_some());
}
