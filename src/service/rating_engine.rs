//! ELO rating engine.
//!
//! Expected score for A against B:
//!   E(A) = 1 / (1 + 10 ^ ((R(B) - R(A)) / scale))
//!
//! Rating change for one player:
//!   R'(A) = R(A) + K(A) * (score - E(A)), score = 1.0 for a win, 0.0 for a loss
//!
//! Each player's K is resolved from that player's own rating and match count.

use serde::{Deserialize, Serialize};

use crate::policy::SportConfig;

/// Rating change produced by one match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingDelta {
    /// Points added to the winner. Always > 0.
    pub winner_delta: f64,
    /// Points added to the loser. Always < 0.
    pub loser_delta: f64,
    pub winner_new_rating: f64,
    pub loser_new_rating: f64,
}

/// Probability in (0, 1) that a player rated `rating_a` beats one rated `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    expected_score_with(&SportConfig::DEFAULT, rating_a, rating_b)
}

pub fn expected_score_with(config: &SportConfig, rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / config.elo_scale))
}

pub fn k_factor(rating: f64, match_count: u32) -> f64 {
    SportConfig::DEFAULT.k_factor(rating, match_count)
}

pub fn calculate_delta(
    winner_rating: f64,
    winner_match_count: u32,
    loser_rating: f64,
    loser_match_count: u32,
) -> RatingDelta {
    calculate_delta_with(
        &SportConfig::DEFAULT,
        winner_rating,
        winner_match_count,
        loser_rating,
        loser_match_count,
    )
}

/// Delta for both players under an explicit sport configuration
pub fn calculate_delta_with(
    config: &SportConfig,
    winner_rating: f64,
    winner_match_count: u32,
    loser_rating: f64,
    loser_match_count: u32,
) -> RatingDelta {
    let k_winner = config.k_factor(winner_rating, winner_match_count);
    let k_loser = config.k_factor(loser_rating, loser_match_count);

    let expected_winner = expected_score_with(config, winner_rating, loser_rating);
    let expected_loser = expected_score_with(config, loser_rating, winner_rating);

    let winner_delta = k_winner * (1.0 - expected_winner);
    let loser_delta = k_loser * (0.0 - expected_loser);

    RatingDelta {
        winner_delta,
        loser_delta,
        winner_new_rating: winner_rating + winner_delta,
        loser_new_rating: loser_rating + loser_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_equal_ratings_expect_half() {
        for rating in [0.0, 850.0, 1000.0, 1600.0, 2400.0] {
            assert_eq!(expected_score(rating, rating), 0.5);
        }
    }

    #[test]
    fn test_four_hundred_point_gap() {
        assert!((expected_score(1400.0, 1000.0) - 0.9091).abs() < 0.001);
        assert!((expected_score(1000.0, 1400.0) - 0.0909).abs() < 0.001);
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        for (a, b) in [(1200.0, 1050.0), (800.0, 2000.0), (1000.0, 1000.5), (1700.0, 400.0)] {
            let sum = expected_score(a, b) + expected_score(b, a);
            assert!((sum - 1.0).abs() < EPS, "sum was {} for {} vs {}", sum, a, b);
        }
    }

    #[test]
    fn test_k_factor_schedule() {
        assert_eq!(k_factor(1000.0, 0), 40.0);
        assert_eq!(k_factor(1000.0, 9), 40.0);
        assert_eq!(k_factor(1000.0, 10), 24.0);
        assert_eq!(k_factor(1200.0, 50), 24.0);
        assert_eq!(k_factor(1601.0, 0), 16.0);
        assert_eq!(k_factor(1601.0, 50), 16.0);
        // 1600 itself is not high-rated
        assert_eq!(k_factor(1600.0, 20), 24.0);
        assert_eq!(k_factor(1600.0, 5), 40.0);
    }

    #[test]
    fn test_equal_provisional_players() {
        let delta = calculate_delta(1000.0, 0, 1000.0, 0);
        assert_eq!(delta.winner_delta, 20.0);
        assert_eq!(delta.loser_delta, -20.0);
        assert_eq!(delta.winner_new_rating, 1020.0);
        assert_eq!(delta.loser_new_rating, 980.0);
    }

    #[test]
    fn test_equal_standard_players() {
        let delta = calculate_delta(1000.0, 15, 1000.0, 15);
        assert_eq!(delta.winner_delta, 12.0);
        assert_eq!(delta.loser_delta, -12.0);
    }

    #[test]
    fn test_upset_moves_more_than_expected_win() {
        let upset = calculate_delta(1000.0, 20, 1400.0, 20);
        let expected_win = calculate_delta(1400.0, 20, 1000.0, 20);
        assert!(upset.winner_delta > expected_win.winner_delta);
        assert!((upset.winner_delta - 24.0 * (1.0 - 0.0909)).abs() < 0.05);
    }

    #[test]
    fn test_signs_and_new_ratings() {
        let cases = [
            (1000.0, 0, 1000.0, 0),
            (1700.0, 3, 900.0, 40),
            (850.0, 12, 1650.0, 80),
            (1600.0, 10, 1601.0, 2),
        ];
        for (wr, wmc, lr, lmc) in cases {
            let delta = calculate_delta(wr, wmc, lr, lmc);
            assert!(delta.winner_delta > 0.0);
            assert!(delta.loser_delta < 0.0);
            assert_eq!(delta.winner_new_rating, wr + delta.winner_delta);
            assert_eq!(delta.loser_new_rating, lr + delta.loser_delta);
        }
    }

    #[test]
    fn test_mixed_brackets_are_not_zero_sum() {
        // provisional winner (K=40) against a standard loser (K=24)
        let delta = calculate_delta(1000.0, 2, 1000.0, 30);
        assert_eq!(delta.winner_delta, 20.0);
        assert_eq!(delta.loser_delta, -12.0);
        assert!((delta.winner_delta + delta.loser_delta).abs() > EPS);
    }

    #[test]
    fn test_same_bracket_is_zero_sum() {
        let delta = calculate_delta(1250.0, 30, 1100.0, 45);
        assert!((delta.winner_delta + delta.loser_delta).abs() < EPS);
    }
}
