//! Fixed 9-cell difficulty table.
//!
//! β is strictly increasing easy→medium→hard within each category, and the
//! categories themselves are ordered: lexical carries the lowest β values,
//! arithmetic the highest. The table is immutable; unknown cells are
//! rejected earlier, at [`Cell::parse`](crate::types::Cell::parse).

use crate::types::{Category, Cell, Difficulty};

/// Immutable (category, difficulty) → β mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct BetaTable;

impl BetaTable {
    pub fn new() -> Self {
        Self
    }

    /// Difficulty scalar for one of the fixed 9 cells.
    pub fn lookup(&self, cell: Cell) -> f64 {
        use Category::*;
        use Difficulty::*;

        match (cell.category, cell.difficulty) {
            (Lexical, Easy) => -1.5,
            (Lexical, Medium) => -1.0,
            (Lexical, Hard) => -0.5,
            (Practical, Easy) => 0.0,
            (Practical, Medium) => 0.5,
            (Practical, Hard) => 1.0,
            (Arithmetic, Easy) => 1.5,
            (Arithmetic, Medium) => 2.0,
            (Arithmetic, Hard) => 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [Category; 3] = [
        Category::Lexical,
        Category::Practical,
        Category::Arithmetic,
    ];
    const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[test]
    fn beta_increases_with_difficulty_within_category() {
        let table = BetaTable::new();
        for category in CATEGORIES {
            let easy = table.lookup(Cell::new(category, Difficulty::Easy));
            let medium = table.lookup(Cell::new(category, Difficulty::Medium));
            let hard = table.lookup(Cell::new(category, Difficulty::Hard));
            assert!(easy < medium && medium < hard, "{category}");
        }
    }

    #[test]
    fn table_encodes_a_global_ordering_across_all_cells() {
        // lexical < practical < arithmetic, with no overlap between
        // adjacent categories
        let table = BetaTable::new();
        let mut previous = f64::NEG_INFINITY;
        for category in CATEGORIES {
            for difficulty in DIFFICULTIES {
                let beta = table.lookup(Cell::new(category, difficulty));
                assert!(beta > previous);
                previous = beta;
            }
        }
    }

    #[test]
    fn reference_values() {
        let table = BetaTable::new();
        assert_eq!(
            table.lookup(Cell::new(Category::Lexical, Difficulty::Easy)),
            -1.5
        );
        assert_eq!(
            table.lookup(Cell::new(Category::Practical, Difficulty::Medium)),
            0.5
        );
        assert_eq!(
            table.lookup(Cell::new(Category::Arithmetic, Difficulty::Hard)),
            2.5
        );
    }
}
