use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::SportsHubError;
use crate::models::game_state::GameState;
use crate::models::match_result::MatchResult;
use crate::models::player::Player;
use crate::models::sport::Sport;
use crate::policy::{MatchRules, SportConfig};
use crate::service::rating_engine::{self, RatingDelta};

/// Names installed by `seed_players`
pub const SEED_ROSTER: [&str; 4] = ["Jordan Avery", "Riley Chen", "Sam Okafor", "Taylor Brooks"];

static SHARED: LazyLock<StateAuthority> = LazyLock::new(StateAuthority::new);

type SnapshotSender = mpsc::UnboundedSender<Arc<GameState>>;

/// State Authority - single owner of the roster and match history.
///
/// Every mutation runs under one lock, and publishing to subscribers
/// happens under that same lock, so all subscribers observe one total order
/// of snapshots. Cloning the authority yields another handle to the same
/// state.
#[derive(Clone, Default)]
pub struct StateAuthority {
    inner: Arc<Mutex<AuthorityState>>,
}

#[derive(Default)]
struct AuthorityState {
    sequence: u64,
    players: Vec<Player>,
    matches: Vec<MatchResult>,
    subscribers: HashMap<Uuid, SnapshotSender>,
}

impl AuthorityState {
    fn snapshot(&self) -> Arc<GameState> {
        Arc::new(GameState {
            sequence: self.sequence,
            players: self.players.clone(),
            matches: self.matches.clone(),
        })
    }

    fn position(&self, player_id: Uuid) -> Result<usize, SportsHubError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(SportsHubError::PlayerNotFound(player_id))
    }

    fn publish(&mut self) {
        self.sequence += 1;
        let snapshot = self.snapshot();
        let sequence = self.sequence;

        self.subscribers.retain(|id, tx| {
            if tx.send(Arc::clone(&snapshot)).is_ok() {
                true
            } else {
                debug!(subscriber_id = %id, "Pruning closed subscriber");
                false
            }
        });

        debug!(
            sequence,
            subscribers = self.subscribers.len(),
            "Published snapshot"
        );
    }

    fn commit(
        &mut self,
        winner_idx: usize,
        loser_idx: usize,
        sport: Sport,
        delta: &RatingDelta,
        played_at: DateTime<Utc>,
    ) {
        self.players[winner_idx].record_result(sport, delta.winner_new_rating);
        self.players[loser_idx].record_result(sport, delta.loser_new_rating);

        let winner_id = self.players[winner_idx].id;
        let loser_id = self.players[loser_idx].id;
        self.matches
            .push(MatchResult::new(winner_id, loser_id, sport, played_at));

        info!(
            winner_id = %winner_id,
            loser_id = %loser_id,
            sport = %sport,
            winner_rating = delta.winner_new_rating,
            loser_rating = delta.loser_new_rating,
            "Match result committed"
        );

        self.publish();
    }
}

impl StateAuthority {
    /// Create an isolated authority with an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide authority, created on first access
    pub fn shared() -> &'static StateAuthority {
        &SHARED
    }

    fn lock(&self) -> MutexGuard<'_, AuthorityState> {
        lock_state(&self.inner)
    }

    // =============================================================================
    // SEED PLAYERS
    // =============================================================================

    /// Install the fixed roster at the default rating.
    /// Idempotent: does nothing once the roster is non-empty.
    pub fn seed_players(&self) {
        let mut state = self.lock();
        if !state.players.is_empty() {
            debug!(players = state.players.len(), "Roster already seeded");
            return;
        }

        state.players = SEED_ROSTER.iter().map(|name| Player::new(*name)).collect();

        info!(players = state.players.len(), "Seeded player roster");

        state.publish();
    }

    // =============================================================================
    // SUBSCRIBE
    // =============================================================================

    /// Register a subscriber. The current snapshot is queued immediately,
    /// followed by every later snapshot in commit order.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        let mut state = self.lock();
        // the receiver is alive, so the initial send cannot fail
        let _ = tx.send(state.snapshot());
        state.subscribers.insert(id, tx);

        info!(
            subscriber_id = %id,
            sequence = state.sequence,
            "Subscriber registered"
        );

        Subscription {
            id,
            receiver: rx,
            registry: Arc::downgrade(&self.inner),
            terminated: false,
        }
    }

    // =============================================================================
    // APPLY MATCH
    // =============================================================================

    /// Commit a match outcome computed by the caller, stamped with the
    /// current time.
    ///
    /// If either player is unknown, or both ids are the same, nothing changes
    /// and nothing is published.
    pub fn apply_match_result(
        &self,
        winner_id: Uuid,
        loser_id: Uuid,
        sport: Sport,
        delta: &RatingDelta,
    ) -> Result<(), SportsHubError> {
        self.apply_match_result_at(winner_id, loser_id, sport, delta, Utc::now())
    }

    pub fn apply_match_result_at(
        &self,
        winner_id: Uuid,
        loser_id: Uuid,
        sport: Sport,
        delta: &RatingDelta,
        played_at: DateTime<Utc>,
    ) -> Result<(), SportsHubError> {
        MatchRules::validate(winner_id, loser_id).inspect_err(|e| {
            warn!(error = %e, "Rejected match result");
        })?;

        let mut state = self.lock();
        let (winner_idx, loser_idx) = resolve_pair(&state, winner_id, loser_id)?;

        state.commit(winner_idx, loser_idx, sport, delta, played_at);
        Ok(())
    }

    /// Rate and commit a match in one step.
    ///
    /// Both players' current ratings and match counts are read under the
    /// same lock that commits the result, so concurrent callers never rate
    /// against stale values.
    pub fn record_match(
        &self,
        winner_id: Uuid,
        loser_id: Uuid,
        sport: Sport,
    ) -> Result<RatingDelta, SportsHubError> {
        self.record_match_at(winner_id, loser_id, sport, Utc::now())
    }

    pub fn record_match_at(
        &self,
        winner_id: Uuid,
        loser_id: Uuid,
        sport: Sport,
        played_at: DateTime<Utc>,
    ) -> Result<RatingDelta, SportsHubError> {
        MatchRules::validate(winner_id, loser_id).inspect_err(|e| {
            warn!(error = %e, "Rejected match result");
        })?;

        let mut state = self.lock();
        let (winner_idx, loser_idx) = resolve_pair(&state, winner_id, loser_id)?;

        let winner = &state.players[winner_idx];
        let loser = &state.players[loser_idx];
        let delta = rating_engine::calculate_delta_with(
            &SportConfig::for_sport(sport),
            winner.rating(sport),
            winner.match_count(sport),
            loser.rating(sport),
            loser.match_count(sport),
        );

        state.commit(winner_idx, loser_idx, sport, &delta, played_at);
        Ok(delta)
    }

    // =============================================================================
    // QUERY METHODS
    // =============================================================================

    /// Current snapshot without registering a subscriber
    pub fn snapshot(&self) -> Arc<GameState> {
        self.lock().snapshot()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

fn lock_state(inner: &Mutex<AuthorityState>) -> MutexGuard<'_, AuthorityState> {
    // state is only mutated after all fallible lookups, so a poisoned lock
    // still guards a consistent roster
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn resolve_pair(
    state: &AuthorityState,
    winner_id: Uuid,
    loser_id: Uuid,
) -> Result<(usize, usize), SportsHubError> {
    let pair = state
        .position(winner_id)
        .and_then(|w| state.position(loser_id).map(|l| (w, l)));

    if let Err(ref e) = pair {
        warn!(
            winner_id = %winner_id,
            loser_id = %loser_id,
            error = %e,
            "Ignoring match result for unknown player"
        );
    }
    pair
}

/// Handle to a stream of snapshots from a `StateAuthority`.
///
/// Dropping the handle unregisters it. `cancel` does the same explicitly and
/// may be called any number of times.
pub struct Subscription {
    id: Uuid,
    receiver: mpsc::UnboundedReceiver<Arc<GameState>>,
    registry: Weak<Mutex<AuthorityState>>,
    terminated: bool,
}

impl Subscription {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_active(&self) -> bool {
        !self.terminated
    }

    /// Wait for the next snapshot. Returns `None` once terminated, or when
    /// the authority is gone and every queued snapshot has been taken.
    pub async fn next(&mut self) -> Option<Arc<GameState>> {
        if self.terminated {
            return None;
        }
        self.receiver.recv().await
    }

    /// Next queued snapshot, if one is already waiting
    pub fn try_next(&mut self) -> Option<Arc<GameState>> {
        if self.terminated {
            return None;
        }
        self.receiver.try_recv().ok()
    }

    pub fn cancel(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        self.receiver.close();

        if let Some(inner) = self.registry.upgrade() {
            lock_state(&inner).subscribers.remove(&self.id);
        }

        info!(subscriber_id = %self.id, "Subscriber terminated");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("terminated", &self.terminated)
            .finish()
    }
}
