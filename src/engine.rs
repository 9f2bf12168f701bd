//! Turn controller.
//!
//! Owns the registry and the player/mission bindings for a session and
//! drives the attack cycle: pick attacker, pick defender, validate, resolve
//! one exchange, evaluate missions and the loss condition, then either loop
//! or terminate. [`run_session`] runs the cycle against a [`Console`].

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{info, warn};

use crate::board::{Faction, Registry, RegistryError};
use crate::console::{write_map, Console};
use crate::mission::{evaluate, Mission, MissionCatalog};
use crate::protocol::{
    parse_attacker_choice, parse_index, AttackerChoice, NotationError, CHECK_MISSIONS_TOKEN,
};
use crate::resolve::{resolve_attack, CombatOutcome, DiceSource, TiePolicy};

/// Default minimum garrison needed to launch an attack.
pub const DEFAULT_MIN_ATTACK_TROOPS: u32 = 2;

/// Rules for one session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Check every mission after each resolved attack. When false, missions
    /// are only checked when the player asks for it at the attacker prompt.
    pub evaluate_after_every_attack: bool,
    /// Troops a territory needs to attack. A faction whose territories all
    /// fall below this is defeated.
    pub min_attack_troops: u32,
    pub tie_policy: TiePolicy,
    pub catalog: MissionCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            evaluate_after_every_attack: true,
            min_attack_troops: DEFAULT_MIN_ATTACK_TROOPS,
            tie_policy: TiePolicy::NoOp,
            catalog: MissionCatalog::standard(),
        }
    }
}

/// A player: a faction bound to one secret mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub faction: Faction,
    pub mission: Mission,
}

/// Rejected attack orders. The registry is never touched when one of these
/// is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("territory {index} does not exist (choose 1 to {len})")]
    OutOfRange { index: i64, len: usize },

    #[error("a territory cannot attack itself")]
    SelfAttack,

    #[error("you cannot attack your own army ({owner})")]
    FriendlyFire { owner: Faction },

    #[error("the attacker needs at least {required} troops but has {troops}")]
    NotEnoughTroops { troops: u32, required: u32 },
}

/// Errors that abort a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid map: {0}")]
    Notation(#[from] NotationError),

    #[error("could not reserve memory for {count} players")]
    PlayerAllocation { count: usize },
}

/// A mission fulfilled by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Victory {
    /// 0-based registration order of the winning player.
    pub player: usize,
    pub faction: Faction,
    pub mission: Mission,
}

/// Why a session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// The player entered `0` at the attacker prompt.
    Quit,
    /// Input ran out before the game finished.
    InputClosed,
    Victory(Victory),
    /// A faction still holds territories but none can attack.
    Defeat { faction: Faction },
}

/// Turn controller states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    AwaitingAttackerChoice,
    AwaitingDefenderChoice { attacker: i64 },
    Validating { attacker: i64, defender: i64 },
    Resolving(ValidatedAttack),
    /// `missions` is false when only the loss condition should be checked.
    EvaluatingMissions { missions: bool, requested: bool },
    Terminated(Termination),
}

/// An attack that passed validation, holding 0-based registry indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAttack {
    attacker: usize,
    defender: usize,
}

impl ValidatedAttack {
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    pub fn defender(&self) -> usize {
        self.defender
    }
}

/// Session state: the map, the players, and the rules.
#[derive(Debug, Clone)]
pub struct Game {
    registry: Registry,
    players: Vec<Player>,
    config: GameConfig,
    attacks: u32,
}

impl Game {
    /// Creates a game with no players yet.
    pub fn new(registry: Registry, config: GameConfig) -> Self {
        Game {
            registry,
            players: Vec::new(),
            config,
            attacks: 0,
        }
    }

    /// Registers a player and draws their mission from the catalog.
    pub fn add_player<D: DiceSource + ?Sized>(&mut self, faction: Faction, dice: &mut D) -> &Player {
        let mission = self.config.catalog.assign(dice);
        self.add_player_with_mission(faction, mission)
    }

    /// Registers a player with an already chosen mission.
    pub fn add_player_with_mission(&mut self, faction: Faction, mission: Mission) -> &Player {
        info!(faction = %faction, mission = %mission, "player registered");
        let idx = self.players.len();
        self.players.push(Player { faction, mission });
        &self.players[idx]
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of attacks resolved so far.
    pub fn attacks(&self) -> u32 {
        self.attacks
    }

    /// Maps a 1-based index onto a registry slot.
    fn slot(&self, index: i64) -> Result<usize, MoveError> {
        let len = self.registry.len();
        usize::try_from(index)
            .ok()
            .filter(|i| (1..=len).contains(i))
            .map(|i| i - 1)
            .ok_or(MoveError::OutOfRange { index, len })
    }

    /// Checks an attack order given as 1-based indices.
    pub fn validate(&self, attacker: i64, defender: i64) -> Result<ValidatedAttack, MoveError> {
        let a = self.slot(attacker)?;
        let d = self.slot(defender)?;
        if a == d {
            return Err(MoveError::SelfAttack);
        }

        let len = self.registry.len();
        let att = self.registry.get(a).map_err(|_| MoveError::OutOfRange { index: attacker, len })?;
        let def = self.registry.get(d).map_err(|_| MoveError::OutOfRange { index: defender, len })?;
        if att.owner == def.owner {
            return Err(MoveError::FriendlyFire {
                owner: att.owner.clone(),
            });
        }
        if !att.can_attack(self.config.min_attack_troops) {
            return Err(MoveError::NotEnoughTroops {
                troops: att.troops,
                required: self.config.min_attack_troops,
            });
        }

        Ok(ValidatedAttack {
            attacker: a,
            defender: d,
        })
    }

    /// Resolves a validated attack with exactly one dice exchange.
    pub fn resolve<D: DiceSource + ?Sized>(
        &mut self,
        attack: ValidatedAttack,
        dice: &mut D,
    ) -> Result<CombatOutcome, MoveError> {
        let len = self.registry.len();
        let (attacker, defender) = self
            .registry
            .pair_mut(attack.attacker(), attack.defender())
            .map_err(|_| MoveError::OutOfRange {
                index: i64::try_from(attack.attacker()).map_or(i64::MAX, |i| i + 1),
                len,
            })?;
        let outcome = resolve_attack(attacker, defender, dice, self.config.tie_policy);
        self.attacks += 1;
        Ok(outcome)
    }

    /// Validates and resolves an attack given as 1-based indices.
    pub fn attack<D: DiceSource + ?Sized>(
        &mut self,
        attacker: i64,
        defender: i64,
        dice: &mut D,
    ) -> Result<CombatOutcome, MoveError> {
        let validated = self.validate(attacker, defender)?;
        self.resolve(validated, dice)
    }

    /// Evaluates every player's mission in registration order and returns
    /// the first one fulfilled.
    pub fn check_missions(&self) -> Option<Victory> {
        self.players
            .iter()
            .enumerate()
            .find(|(_, p)| evaluate(&p.mission, &self.registry, &p.faction))
            .map(|(player, p)| Victory {
                player,
                faction: p.faction.clone(),
                mission: p.mission.clone(),
            })
    }

    /// Returns the first registered faction that still owns territory but
    /// has no territory able to attack.
    pub fn defeated_faction(&self) -> Option<&Faction> {
        let min = self.config.min_attack_troops;
        self.players.iter().map(|p| &p.faction).find(|faction| {
            let mut owned = self.registry.iter().filter(|t| t.is_owned_by(faction)).peekable();
            owned.peek().is_some() && owned.all(|t| !t.can_attack(min))
        })
    }

    /// Runs the end-of-turn checks: missions (when `missions` is set), then
    /// the loss condition.
    pub fn end_of_turn(&self, missions: bool) -> Option<Termination> {
        if missions {
            if let Some(victory) = self.check_missions() {
                return Some(Termination::Victory(victory));
            }
        }
        self.defeated_faction().map(|faction| Termination::Defeat {
            faction: faction.clone(),
        })
    }
}

/// Plays a session until it terminates.
///
/// Malformed input re-prompts in the same state. Rejected moves return to
/// the attacker prompt. End of input terminates with
/// [`Termination::InputClosed`].
pub fn run_session<R, W, D>(
    game: &mut Game,
    dice: &mut D,
    console: &mut Console<R, W>,
) -> Result<Termination, SessionError>
where
    R: BufRead,
    W: Write,
    D: DiceSource + ?Sized,
{
    let mut state = TurnState::AwaitingAttackerChoice;
    info!(
        territories = game.registry.len(),
        players = game.players.len(),
        "session started"
    );

    loop {
        state = match state {
            TurnState::AwaitingAttackerChoice => await_attacker(game, console)?,
            TurnState::AwaitingDefenderChoice { attacker } => {
                let prompt = format!(
                    "Choose the defending territory (1 to {}): ",
                    game.registry.len()
                );
                match console.prompt_parsed(&prompt, parse_index)? {
                    Some(defender) => TurnState::Validating { attacker, defender },
                    None => TurnState::Terminated(Termination::InputClosed),
                }
            }
            TurnState::Validating { attacker, defender } => {
                match game.validate(attacker, defender) {
                    Ok(validated) => TurnState::Resolving(validated),
                    Err(e) => {
                        warn!(attacker, defender, error = %e, "move rejected");
                        writeln!(console.out(), "Invalid move: {}", e)?;
                        TurnState::AwaitingAttackerChoice
                    }
                }
            }
            TurnState::Resolving(validated) => {
                let attacker_name = game.registry.get(validated.attacker())?.name.clone();
                let defender_name = game.registry.get(validated.defender())?.name.clone();
                match game.resolve(validated, dice) {
                    Ok(outcome) => {
                        write_battle(
                            console.out(),
                            attacker_name.as_str(),
                            defender_name.as_str(),
                            &outcome,
                        )?;
                        TurnState::EvaluatingMissions {
                            missions: game.config.evaluate_after_every_attack,
                            requested: false,
                        }
                    }
                    Err(e) => {
                        writeln!(console.out(), "Invalid move: {}", e)?;
                        TurnState::AwaitingAttackerChoice
                    }
                }
            }
            TurnState::EvaluatingMissions { missions, requested } => {
                match game.end_of_turn(missions) {
                    Some(termination) => TurnState::Terminated(termination),
                    None => {
                        if requested {
                            writeln!(console.out(), "No mission has been completed yet.")?;
                        }
                        TurnState::AwaitingAttackerChoice
                    }
                }
            }
            TurnState::Terminated(termination) => {
                write_termination(console.out(), game, &termination)?;
                info!(attacks = game.attacks, termination = ?termination, "session ended");
                return Ok(termination);
            }
        };
    }
}

fn await_attacker<R: BufRead, W: Write>(
    game: &Game,
    console: &mut Console<R, W>,
) -> Result<TurnState, SessionError> {
    writeln!(console.out())?;
    write_map(console.out(), &game.registry)?;

    let mut prompt = format!(
        "\n--- ATTACK PHASE ---\nChoose the attacking territory (1 to {}, 0 to quit",
        game.registry.len()
    );
    if !game.config.evaluate_after_every_attack {
        prompt.push_str(&format!(", {} to check missions", CHECK_MISSIONS_TOKEN));
    }
    prompt.push_str("): ");

    let state = match console.prompt_parsed(&prompt, parse_attacker_choice)? {
        None => TurnState::Terminated(Termination::InputClosed),
        Some(AttackerChoice::Quit) => TurnState::Terminated(Termination::Quit),
        Some(AttackerChoice::CheckMissions) => TurnState::EvaluatingMissions {
            missions: true,
            requested: true,
        },
        Some(AttackerChoice::Attack(attacker)) => TurnState::AwaitingDefenderChoice { attacker },
    };
    Ok(state)
}

fn write_battle<W: Write>(
    out: &mut W,
    attacker: &str,
    defender: &str,
    outcome: &CombatOutcome,
) -> io::Result<()> {
    writeln!(out, "\n--- BATTLE RESULT ---")?;
    writeln!(out, "Attacker {} rolled: {}", attacker, outcome.attacker_roll)?;
    writeln!(out, "Defender {} rolled: {}", defender, outcome.defender_roll)?;
    writeln!(out, "{}", outcome)?;
    if let Some(conquest) = &outcome.conquest {
        writeln!(
            out,
            "CONQUEST! {} was taken by the {} army.",
            defender, conquest.new_owner
        )?;
        writeln!(
            out,
            "{} troops moved into the new territory.",
            conquest.transferred
        )?;
    }
    Ok(())
}

fn write_termination<W: Write>(
    out: &mut W,
    game: &Game,
    termination: &Termination,
) -> io::Result<()> {
    match termination {
        Termination::Quit | Termination::InputClosed => {
            writeln!(out, "Game over. See you next time!")
        }
        Termination::Victory(victory) => {
            writeln!(out, "\n======================================")?;
            writeln!(
                out,
                "   VICTORY! PLAYER {} ({}) WINS!",
                victory.player + 1,
                victory.faction
            )?;
            writeln!(out, "   Mission accomplished: {}", victory.mission)?;
            writeln!(out, "======================================")
        }
        Termination::Defeat { faction } => {
            writeln!(out)?;
            write_map(out, &game.registry)?;
            writeln!(
                out,
                "DEFEAT! The {} army no longer has a territory able to attack.",
                faction
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;
    use crate::protocol::parse_map;
    use crate::resolve::ScriptedDice;

    fn scenario() -> Registry {
        parse_map("T1:Red:5;T2:Red:3;T3:Blue:1;T4:Blue:4").unwrap()
    }

    fn game() -> Game {
        Game::new(scenario(), GameConfig::default())
    }

    fn run(game: &mut Game, dice: &mut ScriptedDice, input: &str) -> (Termination, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let t = run_session(game, dice, &mut console).unwrap();
        let (_, out) = console.into_inner();
        (t, String::from_utf8(out).unwrap())
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let g = game();
        assert_eq!(g.validate(0, 1), Err(MoveError::OutOfRange { index: 0, len: 4 }));
        assert_eq!(g.validate(1, 5), Err(MoveError::OutOfRange { index: 5, len: 4 }));
        assert_eq!(g.validate(-2, 3), Err(MoveError::OutOfRange { index: -2, len: 4 }));
        assert_eq!(g.validate(2, -1), Err(MoveError::OutOfRange { index: -1, len: 4 }));
    }

    #[test]
    fn validated_attack_holds_zero_based_slots() {
        let v = game().validate(2, 3).unwrap();
        assert_eq!((v.attacker(), v.defender()), (1, 2));
    }

    #[test]
    fn validate_rejects_self_attack() {
        assert_eq!(game().validate(2, 2), Err(MoveError::SelfAttack));
    }

    #[test]
    fn validate_rejects_friendly_fire() {
        assert_eq!(
            game().validate(1, 2),
            Err(MoveError::FriendlyFire {
                owner: Faction::from("Red")
            })
        );
    }

    #[test]
    fn validate_rejects_weak_attacker() {
        assert_eq!(
            game().validate(3, 1),
            Err(MoveError::NotEnoughTroops {
                troops: 1,
                required: 2
            })
        );
    }

    #[test]
    fn friendly_fire_leaves_registry_unchanged() {
        let mut g = game();
        let before = g.registry().clone();
        let mut dice = ScriptedDice::new(&[6, 1]);
        assert!(g.attack(1, 2, &mut dice).is_err());
        assert_eq!(*g.registry(), before);
        assert_eq!(g.attacks(), 0);
    }

    #[test]
    fn conquest_scenario() {
        let mut g = game();
        let mut dice = ScriptedDice::new(&[6, 1]);
        let outcome = g.attack(2, 3, &mut dice).unwrap();
        assert_eq!(outcome.conquest.map(|c| c.transferred), Some(1));
        assert_eq!(
            *g.registry(),
            parse_map("T1:Red:5;T2:Red:2;T3:Red:1;T4:Blue:4").unwrap()
        );
        assert_eq!(g.attacks(), 1);
    }

    #[test]
    fn first_fulfilled_mission_in_registration_order_wins() {
        let mut g = Game::new(
            parse_map("T1:Red:11;T2:Blue:12").unwrap(),
            GameConfig::default(),
        );
        g.add_player_with_mission(Faction::from("Blue"), Mission::MinimumTroopsInOneTerritory(10));
        g.add_player_with_mission(Faction::from("Red"), Mission::MinimumTroopsInOneTerritory(10));
        let victory = g.check_missions().unwrap();
        assert_eq!(victory.player, 0);
        assert_eq!(victory.faction, "Blue");
    }

    #[test]
    fn no_players_means_no_victory() {
        assert!(game().check_missions().is_none());
    }

    #[test]
    fn add_player_draws_from_configured_catalog() {
        let config = GameConfig {
            catalog: MissionCatalog::new(vec![Mission::MinimumTroopsInOneTerritory(20)]).unwrap(),
            ..GameConfig::default()
        };
        let mut g = Game::new(scenario(), config);
        let mut dice = ScriptedDice::default().with_picks(&[4]);
        let player = g.add_player(Faction::from("Blue"), &mut dice);
        assert_eq!(player.mission, Mission::MinimumTroopsInOneTerritory(20));
    }

    #[test]
    fn add_player_draws_from_catalog() {
        let mut g = game();
        let mut dice = ScriptedDice::default().with_picks(&[3]);
        let player = g.add_player(Faction::from("Red"), &mut dice);
        assert_eq!(player.mission, Mission::ControlAllTerritories);
        assert_eq!(g.players().len(), 1);
    }

    #[test]
    fn defeat_when_no_territory_can_attack() {
        let mut g = Game::new(
            Registry::from_territories(vec![
                Territory::new("T1", "Red", 5),
                Territory::new("T2", "Blue", 1),
                Territory::new("T3", "Blue", 1),
            ]),
            GameConfig::default(),
        );
        g.add_player_with_mission(Faction::from("Red"), Mission::ControlAllTerritories);
        assert!(g.defeated_faction().is_none());
        g.add_player_with_mission(Faction::from("Blue"), Mission::ControlAllTerritories);
        assert_eq!(g.defeated_faction(), Some(&Faction::from("Blue")));
    }

    #[test]
    fn faction_without_territory_is_not_defeated() {
        let mut g = game();
        g.add_player_with_mission(Faction::from("Green"), Mission::ControlAllTerritories);
        assert!(g.defeated_faction().is_none());
        assert!(g.end_of_turn(true).is_none());
    }

    #[test]
    fn session_quits_on_zero() {
        let mut g = game();
        let (t, out) = run(&mut g, &mut ScriptedDice::default(), "0\n");
        assert_eq!(t, Termination::Quit);
        assert!(out.contains("1. T1 (Army Red, Troops: 5)"));
        assert!(out.contains("Game over."));
    }

    #[test]
    fn session_ends_when_input_closes() {
        let mut g = game();
        let (t, _) = run(&mut g, &mut ScriptedDice::default(), "2\n");
        assert_eq!(t, Termination::InputClosed);
    }

    #[test]
    fn session_reprompts_on_malformed_input() {
        let mut g = game();
        let (t, out) = run(&mut g, &mut ScriptedDice::default(), "abc\n1\nxyz\n2\n0\n");
        assert_eq!(t, Termination::Quit);
        assert_eq!(out.matches("Invalid entry").count(), 2);
        assert!(out.contains("Invalid move: you cannot attack your own army (Red)"));
        assert_eq!(*g.registry(), scenario());
    }

    #[test]
    fn session_plays_conquest_then_victory() {
        let mut g = game();
        g.add_player_with_mission(Faction::from("Red"), Mission::ConsecutiveTerritories(3));
        let mut dice = ScriptedDice::new(&[6, 1]);
        let (t, out) = run(&mut g, &mut dice, "2\n3\n");
        assert!(out.contains("Attacker T2 rolled: 6"));
        assert!(out.contains("CONQUEST! T3 was taken by the Red army."));
        assert!(out.contains("VICTORY! PLAYER 1 (Red) WINS!"));
        match t {
            Termination::Victory(v) => assert_eq!(v.mission, Mission::ConsecutiveTerritories(3)),
            other => panic!("expected victory, got {:?}", other),
        }
    }

    #[test]
    fn session_detects_defeat_after_attack() {
        let mut g = Game::new(
            parse_map("T1:Red:2;T2:Blue:3").unwrap(),
            GameConfig::default(),
        );
        g.add_player_with_mission(Faction::from("Red"), Mission::ControlAllTerritories);
        let mut dice = ScriptedDice::new(&[1, 6]);
        let (t, out) = run(&mut g, &mut dice, "1\n2\n");
        assert_eq!(
            t,
            Termination::Defeat {
                faction: Faction::from("Red")
            }
        );
        assert!(out.contains("DEFEAT! The Red army"));
    }

    #[test]
    fn negative_attacker_index_is_an_invalid_move() {
        let mut g = game();
        let (t, out) = run(&mut g, &mut ScriptedDice::default(), "-2\n3\n0\n");
        assert_eq!(t, Termination::Quit);
        assert!(out.contains("Invalid move: territory -2 does not exist (choose 1 to 4)"));
        assert!(!out.contains("Invalid entry"));
    }

    #[test]
    fn rejected_move_does_not_evaluate_missions() {
        let mut g = game();
        g.add_player_with_mission(Faction::from("Red"), Mission::MinimumTerritoryCount(2));
        let (t, out) = run(&mut g, &mut ScriptedDice::new(&[6, 1]), "1\n2\n0\n");
        assert_eq!(t, Termination::Quit);
        assert!(out.contains("Invalid move"));
        assert!(!out.contains("VICTORY"));
        assert_eq!(g.attacks(), 0);
    }

    #[test]
    fn victory_takes_precedence_over_defeat() {
        let mut g = Game::new(
            parse_map("T1:Red:3;T2:Blue:1;T3:Blue:1").unwrap(),
            GameConfig::default(),
        );
        g.add_player_with_mission(Faction::from("Red"), Mission::MinimumTerritoryCount(2));
        g.add_player_with_mission(Faction::from("Blue"), Mission::ControlAllTerritories);
        let mut dice = ScriptedDice::new(&[6, 1]);
        let (t, out) = run(&mut g, &mut dice, "1\n2\n");

        assert_eq!(g.defeated_faction(), Some(&Faction::from("Blue")));
        match t {
            Termination::Victory(v) => assert_eq!(v.faction, "Red"),
            other => panic!("expected victory, got {:?}", other),
        }
        assert!(out.contains("VICTORY! PLAYER 1 (Red) WINS!"));
        assert!(!out.contains("DEFEAT!"));
    }

    #[test]
    fn missions_on_demand_only_checked_when_requested() {
        let config = GameConfig {
            evaluate_after_every_attack: false,
            ..GameConfig::default()
        };
        let mut g = Game::new(scenario(), config);
        g.add_player_with_mission(Faction::from("Red"), Mission::ConsecutiveTerritories(3));
        let mut dice = ScriptedDice::new(&[6, 1]);
        let (t, out) = run(&mut g, &mut dice, "2\n3\nm\n");
        assert!(out.contains("m to check missions"));
        assert!(matches!(t, Termination::Victory(_)));
        assert_eq!(g.attacks(), 1);
    }

    #[test]
    fn requested_check_without_winner_continues() {
        let mut g = game();
        g.add_player_with_mission(Faction::from("Blue"), Mission::ControlAllTerritories);
        let (t, out) = run(&mut g, &mut ScriptedDice::default(), "m\n0\n");
        assert_eq!(t, Termination::Quit);
        assert!(out.contains("No mission has been completed yet."));
    }
}
