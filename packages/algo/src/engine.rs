//! Stateful ability-estimation and item-selection engine.
//!
//! One `ThetaEngine` serves any number of learners. `pick` is a pure read
//! over the ability store; `update` is the single write path and performs
//! a per-learner serialized read-modify-write, so concurrent updates for
//! the same learner never lose a step.

use crate::beta::BetaTable;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::irt;
use crate::level;
use crate::store::AbilityStore;
use crate::types::{Cell, Graded, LevelSnapshot, Observation, UpdateResult, K_THETA, TARGET_P};

pub struct ThetaEngine {
    config: EngineConfig,
    table: BetaTable,
    abilities: AbilityStore,
}

impl Default for ThetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ThetaEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            table: BetaTable::new(),
            abilities: AbilityStore::new(),
        }
    }

    /// Current θ for a learner (0.0 before any update).
    pub fn ability(&self, learner: &str) -> f64 {
        self.abilities.get(learner)
    }

    /// Pure ability → level query.
    pub fn level(&self, learner: &str) -> LevelSnapshot {
        let theta = self.abilities.get(learner);
        LevelSnapshot {
            theta,
            level_int: level::discrete(theta),
            level_float: level::continuous(theta),
        }
    }

    /// Select the candidate whose predicted success probability is closest
    /// to `TARGET_P` at the learner's current θ.
    ///
    /// Ties resolve to the first candidate in the caller-supplied order:
    /// the slice is iterated directly and only a strictly smaller gap
    /// displaces the current best. Side-effect-free; never touches the
    /// ability store beyond one read.
    pub fn pick<'a, T: Graded>(
        &self,
        learner: &str,
        candidates: &'a [T],
    ) -> Result<&'a T, EngineError> {
        let (first, rest) = candidates.split_first().ok_or(EngineError::EmptyPool)?;
        let theta = self.abilities.get(learner);

        let gap = |candidate: &T| {
            let beta = self.table.lookup(candidate.cell());
            (irt::predicted_probability(theta, beta) - TARGET_P).abs()
        };

        let mut best = first;
        let mut best_gap = gap(first);
        for candidate in rest {
            let candidate_gap = gap(candidate);
            if candidate_gap < best_gap {
                best = candidate;
                best_gap = candidate_gap;
            }
        }
        Ok(best)
    }

    /// Process one observed response: single-step online Rasch update with
    /// the latency-adjusted outcome as the observed quantity.
    ///
    /// θ_new = θ_prev + K_THETA · (r − p̂), optionally clamped when
    /// clipping is configured.
    pub fn update(
        &self,
        learner: &str,
        cell: Cell,
        observation: Observation,
    ) -> Result<UpdateResult, EngineError> {
        observation.validate()?;
        let beta = self.table.lookup(cell);
        let theta_clip = self.config.theta_clip;

        let result = self.abilities.update_with(learner, |theta_prev| {
            let pred_prob = irt::predicted_probability(theta_prev, beta);
            let reward = irt::effective_outcome(observation.correct, observation.elapsed_secs);
            let grad = reward - pred_prob;

            let mut theta = theta_prev + K_THETA * grad;
            if let Some(bound) = theta_clip {
                theta = theta.clamp(-bound, bound);
            }

            let result = UpdateResult {
                theta,
                pred_prob,
                grad,
                level_int: level::discrete(theta),
                level_float: level::continuous(theta),
            };
            (theta, result)
        });
        Ok(result)
    }
}
