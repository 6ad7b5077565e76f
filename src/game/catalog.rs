//! Move Catalog
//!
//! The ordered move list that defines the dominance cycle. Index position
//! is cyclic position. Validation runs once at construction; afterwards
//! the catalog is immutable and every other component can rely on its
//! invariants.

use std::collections::HashSet;

use thiserror::Error;

/// Position of a move on the catalog's cycle.
pub type MoveIndex = usize;

/// Minimum number of moves in a valid catalog.
pub const MIN_MOVES: usize = 3;

/// Ordered, duplicate-free list of move names.
///
/// Invariants, enforced by [`MoveCatalog::new`]: at least [`MIN_MOVES`]
/// entries, odd count, all names unique. The index of a name is its
/// position on the dominance cycle, so catalog order decides who beats
/// whom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<String>,
}

/// Rejection reasons for an invalid move list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Fewer than [`MIN_MOVES`] names were supplied.
    #[error("need at least {MIN_MOVES} moves but got {got}, for example: rock paper scissors")]
    TooFewMoves {
        /// Number of names supplied.
        got: usize,
    },

    /// An even number of names cannot split the cycle into two equal arcs.
    #[error("number of moves must be odd but got {got}")]
    EvenMoveCount {
        /// Number of names supplied.
        got: usize,
    },

    /// The same name appeared more than once.
    #[error("moves must be unique but {name:?} appears more than once")]
    DuplicateMove {
        /// The repeated name.
        name: String,
    },
}

impl MoveCatalog {
    /// Validate `moves` and build a catalog, preserving their order.
    pub fn new(moves: Vec<String>) -> Result<Self, CatalogError> {
        if moves.len() < MIN_MOVES {
            return Err(CatalogError::TooFewMoves { got: moves.len() });
        }
        if moves.len() % 2 == 0 {
            return Err(CatalogError::EvenMoveCount { got: moves.len() });
        }
        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(CatalogError::DuplicateMove { name: name.clone() });
            }
        }
        Ok(Self { moves })
    }

    /// Number of moves on the cycle. Always odd and at least [`MIN_MOVES`].
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always `false`; a valid catalog holds at least [`MIN_MOVES`] moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Name at `index`, if in range.
    pub fn name(&self, index: MoveIndex) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// All names in cycle order.
    pub fn names(&self) -> &[String] {
        &self.moves
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_catalog_preserves_order() {
        let catalog = MoveCatalog::new(moves(&["rock", "paper", "scissors"])).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.name(0), Some("rock"));
        assert_eq!(catalog.name(1), Some("paper"));
        assert_eq!(catalog.name(2), Some("scissors"));
        assert_eq!(catalog.names(), moves(&["rock", "paper", "scissors"]));
    }

    #[test]
    fn test_larger_odd_catalog_is_accepted() {
        let names = moves(&["rock", "paper", "scissors", "lizard", "spock"]);
        let catalog = MoveCatalog::new(names).unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_too_few_moves_rejected() {
        let err = MoveCatalog::new(moves(&["rock", "paper"])).unwrap_err();
        assert_eq!(err, CatalogError::TooFewMoves { got: 2 });

        let err = MoveCatalog::new(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::TooFewMoves { got: 0 });
    }

    #[test]
    fn test_even_count_rejected() {
        let err = MoveCatalog::new(moves(&["a", "b", "c", "d"])).unwrap_err();
        assert_eq!(err, CatalogError::EvenMoveCount { got: 4 });
    }

    #[test]
    fn test_duplicate_rejected_with_name() {
        let err = MoveCatalog::new(moves(&["rock", "paper", "rock"])).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateMove {
                name: "rock".to_string()
            }
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        // "Rock" and "rock" are distinct moves.
        let catalog = MoveCatalog::new(moves(&["Rock", "rock", "paper"])).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_name_out_of_range_is_none() {
        let catalog = MoveCatalog::new(moves(&["rock", "paper", "scissors"])).unwrap();
        assert_eq!(catalog.name(3), None);
    }
}
