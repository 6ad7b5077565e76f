//! Fairness Protocol
//!
//! Commit-then-reveal plumbing: secret keys, keyed-hash move commitments
//! and the hex rendering both share.
//!
//! ## Protocol Order
//!
//! 1. The computer's move is drawn and its commitment published.
//! 2. The player chooses.
//! 3. The move name and key are revealed; the digest can be recomputed
//!    by anyone as `HMAC-SHA256(key, move_name)` and compared against
//!    the published value.

pub mod commitment;
pub mod key;

// Re-export key types
pub use commitment::{MoveCommitment, COMMITMENT_LEN};
pub use key::{SecretKey, SECRET_KEY_LEN};

/// Render bytes as uppercase hex pairs joined by `-`, e.g. `A1-B2-C3`.
pub fn hex_pairs(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join("-")
}

// =============================================================================
// TESTS
// =============================================================================
