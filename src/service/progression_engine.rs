//! Rank tier resolution. Bands are half-open with an inclusive lower bound.

use uuid::Uuid;

use crate::models::progression::{ProgressionRecord, RankTier};
use crate::models::sport::Sport;
use crate::policy::ProgressionPolicy;

pub fn tier(rating: f64) -> RankTier {
    if rating >= ProgressionPolicy::ELITE_FLOOR {
        RankTier::Elite
    } else if rating >= ProgressionPolicy::PLATINUM_FLOOR {
        RankTier::Platinum
    } else if rating >= ProgressionPolicy::GOLD_FLOOR {
        RankTier::Gold
    } else if rating >= ProgressionPolicy::SILVER_FLOOR {
        RankTier::Silver
    } else if rating >= ProgressionPolicy::BRONZE_FLOOR {
        RankTier::Bronze
    } else {
        RankTier::Rookie
    }
}

pub fn progression_record(player_id: Uuid, sport: Sport, rating: f64) -> ProgressionRecord {
    ProgressionRecord {
        player_id,
        sport,
        tier: tier(rating),
        current_rating: rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_ratings() {
        assert_eq!(tier(500.0), RankTier::Rookie);
        assert_eq!(tier(850.0), RankTier::Rookie);
        assert_eq!(tier(1000.0), RankTier::Bronze);
        assert_eq!(tier(1200.0), RankTier::Silver);
        assert_eq!(tier(1400.0), RankTier::Gold);
        assert_eq!(tier(1600.0), RankTier::Platinum);
        assert_eq!(tier(1800.0), RankTier::Elite);
    }

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (899.9, RankTier::Rookie),
            (900.0, RankTier::Bronze),
            (1099.9, RankTier::Bronze),
            (1100.0, RankTier::Silver),
            (1299.9, RankTier::Silver),
            (1300.0, RankTier::Gold),
            (1499.9, RankTier::Gold),
            (1500.0, RankTier::Platinum),
            (1699.9, RankTier::Platinum),
            (1700.0, RankTier::Elite),
        ];
        for (rating, expected) in cases {
            assert_eq!(tier(rating), expected, "rating {}", rating);
        }
    }

    #[test]
    fn test_initial_rating_is_bronze() {
        assert_eq!(tier(crate::policy::SportConfig::DEFAULT.initial_rating), RankTier::Bronze);
    }

    #[test]
    fn test_tier_is_monotonic_in_rating() {
        let mut previous = tier(-500.0);
        let mut rating = -500.0;
        while rating < 2500.0 {
            let current = tier(rating);
            assert!(current >= previous);
            previous = current;
            rating += 12.5;
        }
    }

    #[test]
    fn test_progression_record() {
        let player_id = Uuid::new_v4();
        let record = progression_record(player_id, Sport::Basketball, 1350.0);

        assert_eq!(record.player_id, player_id);
        assert_eq!(record.sport, Sport::Basketball);
        assert_eq!(record.tier, RankTier::Gold);
        assert!((record.current_rating - 1350.0).abs() < 0.001);
    }
}
