//! Penalty state resolution from no-show strikes.
//!
//! | strikes | condition              | state                      |
//! |---------|------------------------|----------------------------|
//! | 0       |                        | Clear                      |
//! | 1       |                        | Warned                     |
//! | 2       | now < last + 24h       | Cooldown(last + 24h)       |
//! | 2       | otherwise              | Warned                     |
//! | 3+      | now < last + 72h       | Cooldown(last + 72h)       |
//! | 3+      | otherwise              | Warned                     |
//!
//! Strike counts never decay. An expired cooldown resolves to Warned.
//! The reference time is always supplied by the caller.

use chrono::{DateTime, Duration, Utc};

use crate::models::commitment::{CommitmentRecord, PenaltyState};
use crate::policy::PenaltyPolicy;

pub fn penalty_state(record: &CommitmentRecord, now: DateTime<Utc>) -> PenaltyState {
    match record.strike_count {
        0 => PenaltyState::Clear,
        PenaltyPolicy::WARNING_STRIKE_COUNT => PenaltyState::Warned,
        PenaltyPolicy::SHORT_COOLDOWN_STRIKE_COUNT => {
            cooldown_or_warned(record.last_strike_at, PenaltyPolicy::short_cooldown(), now)
        }
        _ => cooldown_or_warned(record.last_strike_at, PenaltyPolicy::long_cooldown(), now),
    }
}

fn cooldown_or_warned(
    last_strike_at: Option<DateTime<Utc>>,
    window: Duration,
    now: DateTime<Utc>,
) -> PenaltyState {
    // a record with strikes but no timestamp cannot be in cooldown
    let Some(last) = last_strike_at else {
        return PenaltyState::Warned;
    };
    // an unrepresentable end still restricts the player
    let until = last
        .checked_add_signed(window)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    if now < until {
        PenaltyState::Cooldown { until }
    } else {
        PenaltyState::Warned
    }
}

/// New record with one more strike recorded at `at`. The input is untouched.
pub fn apply_strike(record: &CommitmentRecord, at: DateTime<Utc>) -> CommitmentRecord {
    CommitmentRecord {
        player_id: record.player_id,
        sport: record.sport,
        strike_count: record.strike_count.saturating_add(1),
        last_strike_at: Some(at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sport::Sport;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn strike_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap()
    }

    fn record(strike_count: u32) -> CommitmentRecord {
        CommitmentRecord {
            player_id: Uuid::new_v4(),
            sport: Sport::Basketball,
            strike_count,
            last_strike_at: (strike_count > 0).then(strike_time),
        }
    }

    #[test]
    fn test_zero_strikes_is_clear() {
        assert_eq!(penalty_state(&record(0), strike_time()), PenaltyState::Clear);
    }

    #[test]
    fn test_one_strike_is_warned() {
        let now = strike_time() + Duration::minutes(5);
        assert_eq!(penalty_state(&record(1), now), PenaltyState::Warned);
    }

    #[test]
    fn test_two_strikes_within_window() {
        let now = strike_time() + Duration::hours(12);
        assert_eq!(
            penalty_state(&record(2), now),
            PenaltyState::Cooldown {
                until: strike_time() + Duration::hours(24)
            }
        );
    }

    #[test]
    fn test_two_strikes_after_window() {
        let now = strike_time() + Duration::hours(25);
        assert_eq!(penalty_state(&record(2), now), PenaltyState::Warned);
    }

    #[test]
    fn test_two_strikes_at_exact_expiry_is_warned() {
        let now = strike_time() + Duration::hours(24);
        assert_eq!(penalty_state(&record(2), now), PenaltyState::Warned);
    }

    #[test]
    fn test_three_strikes_within_window() {
        let now = strike_time() + Duration::hours(24);
        assert_eq!(
            penalty_state(&record(3), now),
            PenaltyState::Cooldown {
                until: strike_time() + Duration::hours(72)
            }
        );
    }

    #[test]
    fn test_three_strikes_after_window() {
        let now = strike_time() + Duration::hours(73);
        assert_eq!(penalty_state(&record(3), now), PenaltyState::Warned);
    }

    #[test]
    fn test_many_strikes_use_long_window() {
        let now = strike_time() + Duration::hours(48);
        assert_eq!(
            penalty_state(&record(11), now),
            PenaltyState::Cooldown {
                until: strike_time() + Duration::hours(72)
            }
        );
    }

    #[test]
    fn test_three_strikes_at_exact_expiry_is_warned() {
        let now = strike_time() + Duration::hours(72);
        assert_eq!(penalty_state(&record(3), now), PenaltyState::Warned);
    }

    #[test]
    fn test_cooldown_end_past_max_datetime_saturates() {
        let last = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        let mut late = record(3);
        late.last_strike_at = Some(last);

        assert_eq!(
            penalty_state(&late, last),
            PenaltyState::Cooldown {
                until: DateTime::<Utc>::MAX_UTC
            }
        );

        late.strike_count = 2;
        assert!(penalty_state(&late, last).is_restricted());
    }

    #[test]
    fn test_missing_timestamp_degrades_to_warned() {
        let mut malformed = record(2);
        malformed.last_strike_at = None;
        assert_eq!(penalty_state(&malformed, strike_time()), PenaltyState::Warned);
    }

    #[test]
    fn test_apply_strike_increments_and_stamps() {
        let clean = record(0);
        let at = strike_time();

        let first = apply_strike(&clean, at);
        assert_eq!(first.strike_count, 1);
        assert_eq!(first.last_strike_at, Some(at));
        assert_eq!(first.player_id, clean.player_id);
        assert_eq!(first.sport, clean.sport);

        let later = at + Duration::hours(1);
        let second = apply_strike(&first, later);
        assert_eq!(second.strike_count, 2);
        assert_eq!(second.last_strike_at, Some(later));

        // input records are value copies and stay as they were
        assert_eq!(clean.strike_count, 0);
        assert_eq!(first.strike_count, 1);
    }

    #[test]
    fn test_strikes_are_per_sport() {
        let player_id = Uuid::new_v4();
        let basketball = CommitmentRecord::new(player_id, Sport::Basketball);
        let football = CommitmentRecord::new(player_id, Sport::Football);

        let now = strike_time();
        let mut struck = basketball;
        for _ in 0..3 {
            struck = apply_strike(&struck, now);
        }

        assert!(penalty_state(&struck, now).is_restricted());
        assert_eq!(penalty_state(&football, now), PenaltyState::Clear);
        assert_eq!(football.strike_count, 0);
        assert_eq!(struck.sport, Sport::Basketball);
    }

    #[test]
    fn test_expired_cooldown_never_clears() {
        let far_future = strike_time() + Duration::days(365);
        for strikes in 1..=5 {
            assert_eq!(penalty_state(&record(strikes), far_future), PenaltyState::Warned);
        }
    }
}
