//! # dyscalc-algo - adaptive quizzing core
//!
//! Pure Rust engine that estimates a learner's latent ability from
//! binary-choice responses and response latency, and selects the next quiz
//! item so the predicted success probability stays near a fixed target.
//!
//! - **BetaTable** - fixed 9-cell (category, difficulty) → β mapping
//! - **irt** - Rasch success probability and latency-adjusted outcome
//! - **AbilityStore** - per-learner θ with per-key locking
//! - **level** - saturating θ → level(1..=30) transform
//! - **ThetaEngine** - pick / update / level orchestration
//!
//! The crate is synchronous and in-memory: no I/O, no async, no
//! persistence. Pool loading, label normalization, and any presentation
//! surface live in the caller.
//!
//! ## Usage
//!
//! ```rust
//! use dyscalc_algo::{Cell, Observation, ThetaEngine};
//!
//! let engine = ThetaEngine::new();
//! let pool = vec![
//!     Cell::parse("lexical_dyscalculia", "easy").unwrap(),
//!     Cell::parse("practical_dyscalculia", "medium").unwrap(),
//! ];
//! let item = engine.pick("child_a", &pool).unwrap();
//! let result = engine
//!     .update("child_a", *item, Observation::new(true, 2.0).unwrap())
//!     .unwrap();
//! assert!(result.level_int >= 1 && result.level_int <= 30);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod beta;
pub mod config;
pub mod engine;
pub mod error;
pub mod irt;
pub mod level;
pub mod store;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use beta::BetaTable;
pub use config::EngineConfig;
pub use engine::ThetaEngine;
pub use error::EngineError;
pub use store::AbilityStore;
pub use types::*;
