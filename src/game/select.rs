//! Computer Move Selection
//!
//! Uniform draw over the catalog. A general-purpose generator is enough
//! here: the pick is committed immediately and revealed at the end, so
//! nothing beyond uniformity is required. Secret keys are different and
//! come from the OS CSPRNG in [`crate::proof::key`].

use rand::Rng;

use crate::game::catalog::{MoveCatalog, MoveIndex};

/// Draw a move index uniformly using the thread-local generator.
pub fn select_computer_move(catalog: &MoveCatalog) -> MoveIndex {
    select_with(&mut rand::thread_rng(), catalog)
}

/// Draw a move index uniformly from `rng`.
///
/// The catalog is non-empty by construction, so there is no failure path.
pub fn select_with<R: Rng + ?Sized>(rng: &mut R, catalog: &MoveCatalog) -> MoveIndex {
    rng.gen_range(0..catalog.len())
}

// =============================================================================
// TESTS
// =============================================================================
