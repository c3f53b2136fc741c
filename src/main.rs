use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tokio::signal;

use sportshub::config::Config;
use sportshub::policy::MatchRules;
use sportshub::service::{matchmaking_engine, progression_engine, StateAuthority};
use sportshub::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize telemetry
    init_telemetry(&config.logging.rust_log);

    let sport = config.simulation.sport;
    let authority = StateAuthority::shared();
    authority.seed_players();

    tracing::info!(
        sport = %sport,
        matches = config.simulation.matches,
        "Starting SportsHub match simulation"
    );

    // Observer: logs the leaderboard for every published snapshot
    let mut subscription = authority.subscribe();
    let observer = tokio::spawn(async move {
        while let Some(state) = subscription.next().await {
            for (rank, standing) in state.standings(sport).iter().enumerate() {
                tracing::debug!(
                    sequence = state.sequence,
                    rank = rank + 1,
                    player = %standing.name,
                    rating = standing.rating,
                    tier = %standing.tier,
                    "Standing"
                );
            }
        }
    });

    let simulation = async {
        let mut rng = rand::thread_rng();
        for _ in 0..config.simulation.matches {
            let state = authority.snapshot();
            let pair: Vec<_> = state
                .players
                .choose_multiple(&mut rng, MatchRules::REQUIRED_PLAYER_COUNT)
                .collect();
            if pair.len() < MatchRules::REQUIRED_PLAYER_COUNT {
                tracing::warn!("Not enough players to simulate a match");
                break;
            }

            let (winner, loser) = if rng.gen_bool(0.5) {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            let fairness =
                matchmaking_engine::fairness_score(winner.rating(sport), loser.rating(sport), sport);

            match authority.record_match(winner.id, loser.id, sport) {
                Ok(delta) => tracing::info!(
                    winner = %winner.name,
                    loser = %loser.name,
                    rating_change = delta.winner_delta,
                    winner_tier = %progression_engine::tier(delta.winner_new_rating),
                    fairness,
                    recommended = matchmaking_engine::is_recommended(
                        winner.rating(sport),
                        loser.rating(sport),
                        sport
                    ),
                    "Match played"
                ),
                Err(e) => {
                    let report = e.report();
                    tracing::warn!(error = %report.error, code = report.code, "Match rejected")
                }
            }

            tokio::time::sleep(Duration::from_millis(config.simulation.interval_ms)).await;
        }
    };

    // Graceful shutdown
    tokio::select! {
        _ = simulation => {}
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping simulation...");
        }
    }

    let final_state = authority.snapshot();
    let standings = final_state.standings(sport);
    for standing in &standings {
        tracing::info!(
            player = %standing.name,
            rating = standing.rating,
            matches = standing.match_count,
            tier = %standing.tier,
            "Final standing"
        );
    }
    let leaderboard = serde_json::to_string(&standings)?;
    tracing::debug!(%leaderboard, "Final leaderboard");

    observer.abort();
    Ok(())
}
