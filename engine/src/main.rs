//! Engine smoke run
//!
//! Plays every game to completion with a seeded session and reports timing.

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use engine::records::RecordId;
use engine::{catalog, session_stats, GameSession};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("match-game engine smoke run starting...");

    let start = std::time::Instant::now();
    let mut total_attempts = 0u32;

    for game in catalog::all_games().iter().copied() {
        let mut session = GameSession::with_seed(game, &[], 42, 0)?;
        let ids: Vec<RecordId> = session.state.active.clone();
        let columns = game.columns.len();

        let mut now: u64 = 0;
        for id in ids {
            now += 2000;
            session.poll(now); // let prior feedback clear
            for column in 0..columns {
                session.select(column, id, now)?;
            }
        }
        session.poll(now + 1000);

        let stats = session_stats(&session);
        anyhow::ensure!(stats.complete, "{} did not complete", game.key);
        total_attempts += stats.attempts;
        info!(
            "{}: {} records matched, accuracy {}%",
            game.key, stats.matched, stats.accuracy
        );
    }

    info!(
        "Smoke run complete: {:?} total, {} games, {} attempts",
        start.elapsed(),
        catalog::all_games().len(),
        total_attempts
    );

    Ok(())
}
