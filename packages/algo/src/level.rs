//! Saturating ability → level transform for human-facing feedback.

use crate::types::{MAX_LEVEL, MIN_LEVEL};

/// Continuous level 15·(tanh(θ/2) + 1). Strictly increasing, saturating:
/// approaches 0 and 30 asymptotically, never reaches either for finite θ.
pub fn continuous(theta: f64) -> f64 {
    15.0 * ((theta / 2.0).tanh() + 1.0)
}

/// Display level: ceil of the continuous level, clamped to 1..=30. The
/// clamp guards the asymptotic approach to 0 and the exact-30 boundary.
pub fn discrete(theta: f64) -> i32 {
    (continuous(theta).ceil() as i32).clamp(MIN_LEVEL, MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_stays_in_open_interval() {
        for theta in [-100.0, -8.0, -1.0, 0.0, 1.0, 8.0, 100.0] {
            let level = continuous(theta);
            assert!(level > 0.0 && level < 30.0, "continuous({theta}) = {level}");
        }
    }

    #[test]
    fn neutral_ability_sits_mid_scale() {
        assert_eq!(continuous(0.0), 15.0);
        assert_eq!(discrete(0.0), 15);
    }

    #[test]
    fn discrete_is_clamped_and_non_decreasing() {
        let mut previous = 0;
        for step in -400..=400 {
            let level = discrete(step as f64 / 10.0);
            assert!((MIN_LEVEL..=MAX_LEVEL).contains(&level));
            assert!(level >= previous);
            previous = level;
        }
        assert_eq!(discrete(-100.0), MIN_LEVEL);
        assert_eq!(discrete(100.0), MAX_LEVEL);
    }
}
