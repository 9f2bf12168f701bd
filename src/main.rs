//! Skirmish -- a territorial conquest game played at the console.
//!
//! Registers territories and players from stdin (or from command-line
//! presets), deals each player a secret mission, then runs the attack loop
//! until someone quits, completes a mission, or runs out of attackers.

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use skirmish::board::Faction;
use skirmish::console::{read_factions, read_registry, write_map, write_missions, Console};
use skirmish::engine::{run_session, Game, GameConfig, SessionError, DEFAULT_MIN_ATTACK_TROOPS};
use skirmish::mission::MissionCatalog;
use skirmish::protocol::parse_map;
use skirmish::record::{write_record, SessionRecord};
use skirmish::resolve::{clock_seed, RngDice, TiePolicy};

/// Turn-based territorial conquest with dice combat and secret missions
#[derive(Parser, Debug)]
#[command(name = "skirmish", version)]
struct Args {
    /// Seed for the dice (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// How equal dice rolls are scored
    #[arg(long, value_enum, default_value_t = TieArg::NoOp)]
    tie_policy: TieArg,

    /// Troops a territory needs before it may attack
    #[arg(long, default_value_t = DEFAULT_MIN_ATTACK_TROOPS)]
    min_attack_troops: u32,

    /// Only check missions when asked for with `m` at the attacker prompt
    #[arg(long)]
    missions_on_demand: bool,

    /// Preloaded map as `name:owner:troops;...` (skips territory registration)
    #[arg(long)]
    map: Option<String>,

    /// Player faction, repeatable (skips player registration)
    #[arg(long = "player")]
    players: Vec<String>,

    /// Print a JSON record of the session when it ends
    #[arg(long)]
    summary: bool,

    /// Log combat and mission checks to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieArg {
    NoOp,
    DefenderWins,
}

impl From<TieArg> for TiePolicy {
    fn from(arg: TieArg) -> Self {
        match arg {
            TieArg::NoOp => TiePolicy::NoOp,
            TieArg::DefenderWins => TiePolicy::DefenderWins,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "skirmish=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), SessionError> {
    let preset_map = args.map.as_deref().map(parse_map).transpose()?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut dice = RngDice::seeded(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), BufWriter::new(stdout.lock()));

    writeln!(console.out(), "======================================")?;
    writeln!(console.out(), "  SKIRMISH - INITIAL SETUP")?;
    writeln!(console.out(), "======================================")?;

    let registry = match preset_map {
        Some(registry) => registry,
        None => match read_registry(&mut console)? {
            Some(registry) => registry,
            None => return finish(&mut console),
        },
    };
    writeln!(console.out())?;
    write_map(console.out(), &registry)?;

    let config = GameConfig {
        evaluate_after_every_attack: !args.missions_on_demand,
        min_attack_troops: args.min_attack_troops,
        tie_policy: args.tie_policy.into(),
        catalog: MissionCatalog::standard(),
    };
    let mut game = Game::new(registry, config);

    let factions = if args.players.is_empty() {
        match read_factions(&mut console)? {
            Some(factions) => factions,
            None => return finish(&mut console),
        }
    } else {
        args.players.iter().map(|p| Faction::truncated(p)).collect()
    };
    for faction in factions {
        game.add_player(faction, &mut dice);
    }
    write_missions(console.out(), game.players())?;

    let termination = run_session(&mut game, &mut dice, &mut console)?;

    if args.summary {
        let record = SessionRecord::new(seed, &game, termination);
        write_record(&record, console.out())?;
    }
    console.out().flush()?;
    Ok(())
}

fn finish<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), SessionError> {
    writeln!(console.out(), "\nInput closed during setup. Goodbye!")?;
    console.out().flush()?;
    Ok(())
}
