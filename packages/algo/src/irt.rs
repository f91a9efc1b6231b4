//! Response model: 1-parameter-logistic (Rasch) success probability and
//! the latency-adjusted soft outcome used in place of raw correctness.

use crate::types::{ALPHA, TAU};

/// Logistic function, range (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Predicted success probability σ(θ − β). Strictly increasing in θ,
/// strictly decreasing in β.
pub fn predicted_probability(theta: f64, beta: f64) -> f64 {
    sigmoid(theta - beta)
}

/// Effective outcome r′ = ALPHA·[correct] − (1−ALPHA)·tanh(t/TAU).
///
/// Fast correct answers earn the most credit; slow correct answers still
/// count (credit decays with tanh, never flips sign); the penalty for a
/// slow failure is capped at 1−ALPHA so one bad item cannot dominate the
/// gradient. At t = 0 the outcome is exactly ALPHA·[correct].
pub fn effective_outcome(correct: bool, elapsed_secs: f64) -> f64 {
    let hit = if correct { 1.0 } else { 0.0 };
    ALPHA * hit - (1.0 - ALPHA) * (elapsed_secs / TAU).tanh()
}
