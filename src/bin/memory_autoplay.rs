//! memory-autoplay - headless driver for the match engine.
//!
//! Deals a seeded board and plays it with a bot that remembers every face it
//! has seen, advancing a virtual clock while mismatches resolve.

use anyhow::{bail, ensure, Result};
use clap::Parser;
use rustc_hash::FxHashMap;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use memory_match::core::DEFAULT_HIDE_DELAY_MS;
use memory_match::{
    deal, redeal, DealRng, EngineConfig, EngineSnapshot, EventSink, FaceId, GameEvent,
    MatchEngine, Phase, SelectOutcome, TileId, Visibility,
};

#[derive(Debug, Parser)]
#[command(name = "memory-autoplay", about = "Play memory boards with a recall bot")]
struct Cli {
    /// Number of pairs on the board
    #[arg(long, default_value_t = 8)]
    pairs: usize,

    /// Seed for dealing
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How long mismatches stay visible (milliseconds)
    #[arg(long, default_value_t = DEFAULT_HIDE_DELAY_MS)]
    hide_delay_ms: u64,

    /// Virtual clock step while a mismatch resolves (milliseconds)
    #[arg(long, default_value_t = 100)]
    step_ms: u64,

    /// Games to play; each one after the first is a fresh deal
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Sleep for real between clock steps
    #[arg(long)]
    realtime: bool,
}

/// Logs every engine notification.
struct TraceSink;

impl EventSink for TraceSink {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameWon | GameEvent::Restarted => info!(?event),
            _ => debug!(?event),
        }
    }
}

/// Picks tiles using perfect recall of every face seen so far.
#[derive(Default)]
struct RecallBot {
    seen: FxHashMap<TileId, FaceId>,
}

impl RecallBot {
    fn observe(&mut self, snapshot: &EngineSnapshot) {
        for tile in &snapshot.tiles {
            if let Some(face) = tile.face {
                self.seen.insert(tile.id, face);
            }
        }
    }

    fn pick(&self, snapshot: &EngineSnapshot) -> Option<TileId> {
        let hidden: Vec<TileId> = snapshot
            .tiles
            .iter()
            .filter(|t| t.visibility == Visibility::Hidden)
            .map(|t| t.id)
            .collect();

        let known_mate = |face: FaceId, except: TileId| {
            hidden
                .iter()
                .copied()
                .find(|&t| t != except && self.seen.get(&t) == Some(&face))
        };
        let unseen = || hidden.iter().copied().find(|t| !self.seen.contains_key(t));

        match snapshot.selection.as_slice() {
            [first] => self
                .seen
                .get(first)
                .and_then(|&face| known_mate(face, *first))
                .or_else(unseen)
                .or_else(|| hidden.first().copied()),
            _ => hidden
                .iter()
                .copied()
                .find(|&t| {
                    self.seen
                        .get(&t)
                        .is_some_and(|&face| known_mate(face, t).is_some())
                })
                .or_else(unseen)
                .or_else(|| hidden.first().copied()),
        }
    }
}

#[derive(Debug, Default)]
struct GameStats {
    picks: usize,
    mismatches: u32,
    elapsed: Duration,
}

/// Upper bound on picks before the bot is considered stuck.
fn pick_budget(tiles: usize) -> usize {
    tiles.saturating_mul(tiles).saturating_mul(2)
}

fn play(engine: &mut MatchEngine, cli: &Cli) -> Result<GameStats> {
    let step = Duration::from_millis(cli.step_ms);
    let max_picks = pick_budget(engine.board().len());
    let mut bot = RecallBot::default();
    let mut stats = GameStats::default();

    while !engine.is_won() {
        if engine.phase() == Phase::Resolving {
            if cli.realtime {
                std::thread::sleep(step);
            }
            stats.elapsed += step;
            engine.tick(step, TraceSink);
            continue;
        }

        let snapshot = engine.snapshot();
        bot.observe(&snapshot);
        let Some(tile) = bot.pick(&snapshot) else {
            bail!("no hidden tile left in phase {:?}", engine.phase());
        };

        stats.picks += 1;
        if stats.picks > max_picks {
            bail!("bot made {} picks without finishing", stats.picks);
        }

        match engine.select(tile, TraceSink) {
            SelectOutcome::Mismatched(_) => {
                stats.mismatches += 1;
                bot.observe(&engine.snapshot());
            }
            SelectOutcome::Rejected(reason) => bail!("bot picked {tile}: {reason:?}"),
            _ => {}
        }
    }

    Ok(stats)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    ensure!(
        cli.step_ms > 0 || cli.hide_delay_ms == 0,
        "--step-ms must be positive when --hide-delay-ms is"
    );

    let mut rng = DealRng::new(cli.seed);
    let config = EngineConfig::new().with_hide_delay_ms(cli.hide_delay_ms);
    let board = deal(cli.pairs, &mut rng)?;
    let mut engine = MatchEngine::new(board, config);

    info!(pairs = cli.pairs, seed = cli.seed, games = cli.games, "starting autoplay");

    for game in 1..=cli.games {
        if game > 1 {
            let next = redeal(engine.board(), &mut rng);
            engine.restart_with(next, TraceSink);
        }

        let stats = play(&mut engine, &cli)?;
        println!(
            "game {game}: score {} in {} picks, {} mismatches, {:.1}s waiting",
            engine.score(),
            stats.picks,
            stats.mismatches,
            stats.elapsed.as_secs_f64()
        );
    }

    Ok(())
}
