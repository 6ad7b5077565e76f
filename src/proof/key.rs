//! Secret Keys
//!
//! Fresh 16-byte keys drawn from the operating system CSPRNG. A key binds
//! exactly one commitment: it is generated at session start, held by the
//! session until the outcome is decided, revealed once, and never reused.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::proof::hex_pairs;

/// Secret key length in bytes.
pub const SECRET_KEY_LEN: usize = 16;

/// Per-session HMAC key.
///
/// `Display` renders the reveal format (uppercase hex pairs). `Debug`
/// omits the bytes so the key cannot leak through logs before the reveal.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Build a key from raw bytes, for verifier tooling and tests.
    pub const fn from_bytes(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({SECRET_KEY_LEN} bytes)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex_pairs(&self.0))
    }
}

// =============================================================================
// TESTS
// =============================================================================
