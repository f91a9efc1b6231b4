//! Quiz-pool loading and validation.
//!
//! Raw records come from a JSON array authored outside this program, so
//! every field is treated as untrusted: free-text difficulty labels are
//! normalized through a total function with a documented "medium"
//! default, and records that cannot satisfy the core's closed 9-cell
//! contract (or the two-choice input format) are dropped with a warning
//! rather than guessed at.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use dyscalc_algo::{Category, Cell, Difficulty, Graded};

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to read quiz pool {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("quiz pool {path} is not a valid JSON array")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("quiz pool {path} contains no usable items")]
    Empty { path: String },
}

/// One record as authored in the pool file. Extra keys (translations,
/// answer explanations) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuizRecord {
    #[serde(default)]
    pub quiz_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub option1: Option<String>,
    #[serde(default)]
    pub option2: Option<String>,
    #[serde(rename = "correctIndex", default)]
    pub correct_index: i64,
}

/// A validated two-choice quiz item. The engine only ever looks at the
/// cell; the rest is display payload.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub quiz_id: String,
    pub cell: Cell,
    pub question: String,
    pub option1: String,
    pub option2: String,
    /// 1 or 2
    pub correct_index: u8,
}

impl Graded for PoolEntry {
    fn cell(&self) -> Cell {
        self.cell
    }
}

/// Total difficulty-label normalization. Trims and lowercases; `easy`,
/// `medium`, `hard` pass through; everything else — including empty,
/// missing, and labels like "normal" or "average" — maps to medium so the
/// core's closed-cell precondition is never violated from here.
pub fn normalize_level_label(label: Option<&str>) -> Difficulty {
    let normalized = label.unwrap_or("").trim().to_ascii_lowercase();
    match normalized.as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

fn convert(record: RawQuizRecord) -> Option<PoolEntry> {
    let quiz_id = record.quiz_id.trim().to_string();
    let difficulty = normalize_level_label(record.level.as_deref());

    let Some(category) = Category::parse_label(record.category.trim()) else {
        tracing::warn!(
            quiz_id = %quiz_id,
            category = %record.category,
            "skipping item with unknown category"
        );
        return None;
    };

    let (Some(option1), Some(option2)) = (record.option1, record.option2) else {
        tracing::warn!(quiz_id = %quiz_id, "skipping item without two options");
        return None;
    };

    if !(1..=2).contains(&record.correct_index) {
        tracing::warn!(
            quiz_id = %quiz_id,
            correct_index = record.correct_index,
            "skipping item with out-of-range correctIndex"
        );
        return None;
    }

    Some(PoolEntry {
        quiz_id,
        cell: Cell::new(category, difficulty),
        question: record.question,
        option1,
        option2,
        correct_index: record.correct_index as u8,
    })
}

/// Load and validate a quiz pool file. Unusable records are dropped, not
/// repaired; an entirely unusable file is an error.
pub fn load_quiz_pool(path: &Path) -> Result<Vec<PoolEntry>, PoolError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| PoolError::Io {
        path: display.clone(),
        source,
    })?;
    let records: Vec<RawQuizRecord> =
        serde_json::from_str(&raw).map_err(|source| PoolError::Json {
            path: display.clone(),
            source,
        })?;

    let total = records.len();
    let pool: Vec<PoolEntry> = records.into_iter().filter_map(convert).collect();
    if pool.is_empty() {
        return Err(PoolError::Empty { path: display });
    }
    if pool.len() < total {
        tracing::warn!(
            kept = pool.len(),
            dropped = total - pool.len(),
            "quiz pool loaded with dropped items"
        );
    }
    Ok(pool)
}
