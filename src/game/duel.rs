//! Cyclic Dominance Adjudication
//!
//! Decides win/lose/draw for two moves on an odd-length cycle. Each move
//! beats the `N / 2` moves immediately behind it in catalog order and
//! loses to the `N / 2` ahead of it. With the catalog
//! `rock paper scissors` this is the classic game: paper (1) beats
//! rock (0), scissors (2) beats paper (1), rock (0) beats scissors (2).
//!
//! Because N is odd, the `N - 1` non-draw offsets split into two arcs of
//! exactly `N / 2` each, so for any distinct pair exactly one side wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::catalog::{MoveCatalog, MoveIndex};

/// Result of a single duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides picked the same move.
    Draw,
    /// The player's move dominates the computer's.
    PlayerWins,
    /// The computer's move dominates the player's.
    ComputerWins,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Draw => "Draw",
            Self::PlayerWins => "You win",
            Self::ComputerWins => "You lost",
        };
        f.write_str(label)
    }
}

/// Caller contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    /// A selection index outside the catalog range was passed in.
    #[error("move index {index} is out of range for a catalog of {len} moves")]
    MoveOutOfRange {
        /// The offending index.
        index: MoveIndex,
        /// Catalog size.
        len: usize,
    },
}

/// Decide the outcome of `player` versus `computer`.
///
/// Pure function over the two cyclic positions. Out-of-range indexes are
/// a caller bug and are signaled, never clamped.
pub fn adjudicate(
    catalog: &MoveCatalog,
    player: MoveIndex,
    computer: MoveIndex,
) -> Result<Outcome, DuelError> {
    let n = catalog.len();
    for index in [player, computer] {
        if index >= n {
            return Err(DuelError::MoveOutOfRange { index, len: n });
        }
    }

    if player == computer {
        return Ok(Outcome::Draw);
    }

    // Cyclic steps forward from the computer's move to the player's move.
    // The player wins when their move sits in the winning arc, i.e. at
    // most `mid` steps ahead of the computer's on the cycle.
    let mid = n / 2;
    let d = (player + n - computer) % n;
    if d <= mid {
        Ok(Outcome::PlayerWins)
    } else {
        Ok(Outcome::ComputerWins)
    }
}

// =============================================================================
// TESTS
// =============================================================================
