//! Engine configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Clamp θ to ±bound after each update. `None` (the default) leaves θ
    /// unbounded, matching the reference engine which shipped with
    /// clipping disabled.
    pub theta_clip: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { theta_clip: None }
    }
}

impl EngineConfig {
    /// Reads `THETA_CLIP_ABS`; unset, unparsable, or non-positive values
    /// leave clipping off.
    pub fn from_env() -> Self {
        let theta_clip = std::env::var("THETA_CLIP_ABS")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|bound| bound.is_finite() && *bound > 0.0);
        Self { theta_clip }
    }

    pub fn with_theta_clip(bound: f64) -> Self {
        Self {
            theta_clip: Some(bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_leaves_theta_unbounded() {
        assert_eq!(EngineConfig::default().theta_clip, None);
    }

    #[test]
    fn with_theta_clip_sets_bound() {
        assert_eq!(EngineConfig::with_theta_clip(4.0).theta_clip, Some(4.0));
    }
}
