//! # Arc Duel
//!
//! Rock-paper-scissors generalized to any odd number of unique moves,
//! with a commit-then-reveal protocol so the player can verify the
//! computer did not pick its move after seeing theirs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ARC DUEL                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  game/           - Game logic (pure, deterministic)         │
//! │  ├── catalog.rs  - Validated ordered move list              │
//! │  ├── duel.rs     - Cyclic dominance adjudication            │
//! │  └── select.rs   - Uniform computer-move selection          │
//! │                                                             │
//! │  proof/          - Fairness protocol                        │
//! │  ├── key.rs      - CSPRNG secret keys (16 bytes)            │
//! │  └── commitment.rs - HMAC-SHA256 move commitments           │
//! │                                                             │
//! │  session.rs      - Commit → choose → adjudicate → reveal    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The computer's move is fixed before the player chooses: its HMAC-SHA256
//! digest is published first, and the key is revealed only after the
//! outcome. Recomputing `HMAC-SHA256(key, move)` with any standard tool and
//! comparing against the published digest proves the move never changed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod game;
pub mod proof;
pub mod session;

// Re-export commonly used types
pub use game::catalog::{CatalogError, MoveCatalog, MoveIndex, MIN_MOVES};
pub use game::duel::{adjudicate, DuelError, Outcome};
pub use game::select::select_computer_move;
pub use proof::commitment::{MoveCommitment, COMMITMENT_LEN};
pub use proof::key::{SecretKey, SECRET_KEY_LEN};
pub use session::{DuelReport, GameSession, PlayerChoice};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
