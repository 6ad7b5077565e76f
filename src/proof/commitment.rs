//! Move Commitments
//!
//! The keyed-hash commitment that binds the computer to its move before
//! the player chooses. The digest is HMAC-SHA256 over the UTF-8 bytes of
//! the move name, keyed with the session's [`SecretKey`]. No domain
//! prefix is mixed in: the published digest must match what anyone gets
//! from recomputing `HMAC-SHA256(key, move_name)` with standard tooling
//! once the name and key are revealed.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::proof::hex_pairs;
use crate::proof::key::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Commitment digest length in bytes (SHA-256 output).
pub const COMMITMENT_LEN: usize = 32;

/// Published keyed-hash commitment to a move name.
///
/// Deterministic for equal inputs; different keys produce different
/// digests with overwhelming probability, so the committed move cannot
/// be swapped after the fact without the reveal failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCommitment {
    digest: [u8; COMMITMENT_LEN],
}

impl MoveCommitment {
    /// Commit to `move_name` under `key`.
    pub fn commit(move_name: &str, key: &SecretKey) -> Self {
        let mut mac = mac_for(key);
        mac.update(move_name.as_bytes());
        Self {
            digest: mac.finalize().into_bytes().into(),
        }
    }

    /// Check a revealed name and key against this commitment.
    ///
    /// The comparison is constant-time.
    pub fn verify(&self, move_name: &str, key: &SecretKey) -> bool {
        let mut mac = mac_for(key);
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.digest).is_ok()
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.digest
    }
}

fn mac_for(key: &SecretKey) -> HmacSha256 {
    // HMAC accepts keys of any length.
    HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC key length")
}

impl fmt::Display for MoveCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex_pairs(&self.digest))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::key::SECRET_KEY_LEN;

    fn key(byte: u8) -> SecretKey {
        SecretKey::from_bytes([byte; SECRET_KEY_LEN])
    }

    #[test]
    fn test_commit_is_deterministic() {
        let a = MoveCommitment::commit("rock", &key(1));
        let b = MoveCommitment::commit("rock", &key(1));

        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_different_keys_give_different_digests() {
        let a = MoveCommitment::commit("rock", &key(1));
        let b = MoveCommitment::commit("rock", &key(2));

        assert_ne!(a, b);
    }

    #[test]
    fn test_different_moves_give_different_digests() {
        let a = MoveCommitment::commit("rock", &key(1));
        let b = MoveCommitment::commit("paper", &key(1));

        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_round_trip() {
        let commitment = MoveCommitment::commit("scissors", &key(9));

        assert!(commitment.verify("scissors", &key(9)));
    }

    #[test]
    fn test_verify_rejects_wrong_move() {
        let commitment = MoveCommitment::commit("scissors", &key(9));

        assert!(!commitment.verify("rock", &key(9)));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let commitment = MoveCommitment::commit("scissors", &key(9));

        assert!(!commitment.verify("scissors", &key(8)));
    }

    #[test]
    fn test_display_is_dashed_uppercase_hex() {
        let rendered = MoveCommitment::commit("rock", &key(1)).to_string();

        // 32 byte pairs joined by 31 dashes.
        assert_eq!(rendered.len(), COMMITMENT_LEN * 3 - 1);
        for (i, c) in rendered.chars().enumerate() {
            if i % 3 == 2 {
                assert_eq!(c, '-');
            } else {
                assert!(c.is_ascii_hexdigit() && !c.is_ascii_lowercase());
            }
        }
    }
}
