//! Kill Secure entry point
//!
//! Runs the lethal-cast policy against an in-memory scenario, tick by tick.
//!
//! Usage: `kill-secure [SEED | SCENARIO.json] [SETTINGS.json]`
//! Set `RUST_LOG=debug` for per-tick output.

use kill_secure::consts::SIM_DT;
use kill_secure::{CastCommand, LethalCastPolicy, Scenario, Settings, TickOutcome};

/// Three minutes of host time
const MAX_TICKS: u64 = 30 * 180;
const DEFAULT_SEED: u64 = 12345;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scenario = match args.next() {
        None => Ok(Scenario::generate(DEFAULT_SEED)),
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => Ok(Scenario::generate(seed)),
            Err(_) => Scenario::load(&arg),
        },
    };
    let settings = match args.next() {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    };

    let (mut scenario, settings) = match (scenario, settings) {
        (Ok(scenario), Ok(settings)) => (scenario, settings),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Kill Secure starting: seed {}, {} enemies alive",
        scenario.seed,
        scenario.living_enemies()
    );

    let policy = LethalCastPolicy::new(settings);
    let mut casts = 0u32;
    let mut kills = 0usize;

    while scenario.time_ticks < MAX_TICKS && scenario.living_enemies() > 0 {
        let mut commands: Vec<CastCommand> = Vec::new();
        match policy.on_tick(&scenario, &mut commands) {
            Ok(TickOutcome::Cast { target }) => {
                casts += 1;
                log::debug!("Tick {}: cast for {:?}", scenario.time_ticks, target);
            }
            Ok(outcome) => log::trace!("Tick {}: {:?}", scenario.time_ticks, outcome),
            Err(e) => log::warn!("Skipping tick {}: {}", scenario.time_ticks, e),
        }

        for command in commands {
            match scenario.apply(command, policy.settings()) {
                Ok(killed) => {
                    for id in killed {
                        kills += 1;
                        let name = scenario.hero(id).map(|h| h.name.as_str()).unwrap_or("?");
                        log::info!("Tick {}: killed {}", scenario.time_ticks, name);
                    }
                }
                Err(e) => log::warn!("Cast failed at tick {}: {}", scenario.time_ticks, e),
            }
        }

        scenario.advance(SIM_DT);
    }

    log::info!(
        "Done after {} ticks: {} casts, {} kills, {} enemies alive",
        scenario.time_ticks,
        casts,
        kills,
        scenario.living_enemies()
    );
}
