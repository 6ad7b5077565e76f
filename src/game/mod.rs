//! Game Logic Module
//!
//! The pure game core. No I/O, no shared state; every function is
//! deterministic given its inputs apart from the selector's draw.
//!
//! ## Module Structure
//!
//! - `catalog`: ordered, duplicate-free move list (odd size, ≥ 3)
//! - `duel`: win/lose/draw adjudication over cyclic positions
//! - `select`: uniform computer-move selection

pub mod catalog;
pub mod duel;
pub mod select;

// Re-export key types
pub use catalog::{CatalogError, MoveCatalog, MoveIndex, MIN_MOVES};
pub use duel::{adjudicate, DuelError, Outcome};
pub use select::{select_computer_move, select_with};
