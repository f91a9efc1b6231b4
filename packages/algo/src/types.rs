//! Common Types and Constants
//!
//! Shared data structures used across all engine modules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// ==================== Constants ====================

/// Learning rate for the online θ update
pub const K_THETA: f64 = 0.4;

/// Correctness weight in the effective outcome (latency gets 1 - ALPHA)
pub const ALPHA: f64 = 0.85;

/// Latency time constant (seconds)
pub const TAU: f64 = 10.0;

/// Predicted success probability the item selector aims for
pub const TARGET_P: f64 = 0.70;

/// θ assigned to a learner on first reference
pub const DEFAULT_THETA: f64 = 0.0;

/// Lowest displayable level
pub const MIN_LEVEL: i32 = 1;

/// Highest displayable level
pub const MAX_LEVEL: i32 = 30;

// ==================== Difficulty Cells ====================

/// Dyscalculia quiz category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Matching number symbols to words (6 ↔ six)
    #[serde(rename = "lexical_dyscalculia")]
    Lexical,
    /// Magnitude comparison, number order, real-world quantities
    #[serde(rename = "practical_dyscalculia")]
    Practical,
    /// Basic arithmetic (+, −, ×, ÷)
    #[serde(rename = "arithmetic_dyscalculia")]
    Arithmetic,
}

impl Category {
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "lexical_dyscalculia" => Some(Self::Lexical),
            "practical_dyscalculia" => Some(Self::Practical),
            "arithmetic_dyscalculia" => Some(Self::Arithmetic),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical_dyscalculia",
            Self::Practical => "practical_dyscalculia",
            Self::Arithmetic => "arithmetic_dyscalculia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Item difficulty within a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Strict label parse. Normalization of free-text labels (with a
    /// "medium" fallback) belongs to the boundary layer, not here.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// One of the fixed 9 (category, difficulty) cells of the β table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub category: Category,
    pub difficulty: Difficulty,
}

impl Cell {
    pub fn new(category: Category, difficulty: Difficulty) -> Self {
        Self {
            category,
            difficulty,
        }
    }

    /// Parse raw labels into a cell. Fails closed: any pair outside the
    /// fixed 9 is rejected, never guessed.
    pub fn parse(category: &str, difficulty: &str) -> Result<Self, EngineError> {
        match (
            Category::parse_label(category),
            Difficulty::parse_label(difficulty),
        ) {
            (Some(category), Some(difficulty)) => Ok(Self {
                category,
                difficulty,
            }),
            _ => Err(EngineError::UnknownCell {
                category: category.to_string(),
                difficulty: difficulty.to_string(),
            }),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.category, self.difficulty)
    }
}

/// Anything the selector can rank: exposes its difficulty cell, every
/// other field is inert payload the engine never inspects.
pub trait Graded {
    fn cell(&self) -> Cell;
}

impl Graded for Cell {
    fn cell(&self) -> Cell {
        *self
    }
}

impl<T: Graded + ?Sized> Graded for &T {
    fn cell(&self) -> Cell {
        (**self).cell()
    }
}

// ==================== Observations & Results ====================

/// One observed response: correctness plus solving time in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub correct: bool,
    pub elapsed_secs: f64,
}

impl Observation {
    pub fn new(correct: bool, elapsed_secs: f64) -> Result<Self, EngineError> {
        let observation = Self {
            correct,
            elapsed_secs,
        };
        observation.validate()?;
        Ok(observation)
    }

    /// Elapsed time must be finite and non-negative.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.elapsed_secs.is_finite() || self.elapsed_secs < 0.0 {
            return Err(EngineError::InvalidObservation(format!(
                "elapsed_secs must be finite and non-negative, got {}",
                self.elapsed_secs
            )));
        }
        Ok(())
    }
}

/// Outcome of a single θ update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// New ability estimate
    pub theta: f64,
    /// Predicted success probability at decision time
    pub pred_prob: f64,
    /// Error term r − p̂ driving the update
    pub grad: f64,
    /// Display level, 1..=30
    pub level_int: i32,
    /// Continuous level in (0, 30)
    pub level_float: f64,
}

/// Read-side view of a learner's ability and level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub theta: f64,
    pub level_int: i32,
    pub level_float: f64,
}
