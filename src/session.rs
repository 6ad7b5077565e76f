//! Game Session
//!
//! One commit-reveal round against the computer:
//!
//! ```text
//! start:     draw computer move -> generate key -> publish commitment
//! conclude:  adjudicate the player's move -> reveal name, key, outcome
//!            (or quit: nothing is adjudicated and nothing is revealed)
//! ```
//!
//! [`GameSession::conclude`] consumes the session, so each key is
//! revealed at most once and a resolved session cannot be replayed.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::game::catalog::{MoveCatalog, MoveIndex};
use crate::game::duel::{adjudicate, DuelError, Outcome};
use crate::game::select::select_with;
use crate::proof::commitment::MoveCommitment;
use crate::proof::key::SecretKey;

/// The player's answer to the move menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerChoice {
    /// Play the move at this catalog index.
    Move(MoveIndex),
    /// Abort before adjudication; no outcome, no reveal.
    Quit,
}

/// A single commit-reveal round.
///
/// The computer's move and the secret key stay private to the session
/// until [`GameSession::conclude`] resolves it; only the commitment is
/// observable before then.
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: MoveCatalog,
    computer_move: MoveIndex,
    secret_key: SecretKey,
    commitment: MoveCommitment,
}

/// Reveal record produced when a session resolves.
///
/// `commitment` is the digest exactly as published before the player's
/// choice; `verified` is the result of recomputing it from the revealed
/// name and key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelReport {
    /// Session identifier.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// The player's move name.
    pub player_move: String,
    /// The computer's move name, fixed at commit time.
    pub computer_move: String,
    /// Who won.
    pub outcome: Outcome,
    /// Published digest, uppercase hex pairs.
    pub commitment: String,
    /// Revealed key, uppercase hex pairs.
    pub secret_key: String,
    /// Whether the recomputed digest matches the published one.
    pub verified: bool,
}

impl GameSession {
    /// Start a session: pick the computer's move and commit to it.
    pub fn start(catalog: MoveCatalog) -> Self {
        Self::start_with(&mut rand::thread_rng(), catalog)
    }

    /// Start a session drawing the computer's move from `rng`.
    pub fn start_with<R: Rng + ?Sized>(rng: &mut R, catalog: MoveCatalog) -> Self {
        let computer_move = select_with(rng, &catalog);
        let secret_key = SecretKey::generate();
        let name = catalog
            .name(computer_move)
            .expect("selector stays in catalog range");
        let commitment = MoveCommitment::commit(name, &secret_key);
        let id = Uuid::new_v4();

        debug!(
            session = %id,
            moves = catalog.len(),
            digest = %hex::encode(commitment.as_bytes()),
            "session committed"
        );

        Self {
            id,
            started_at: Utc::now(),
            catalog,
            computer_move,
            secret_key,
            commitment,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The move catalog this session plays over.
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// The commitment to publish before asking for the player's move.
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// Resolve the session with the player's choice.
    ///
    /// Returns `Ok(None)` for [`PlayerChoice::Quit`]: no adjudication
    /// runs and neither the computer's move nor the key is revealed.
    /// An out-of-range move index is signaled as [`DuelError`] and also
    /// reveals nothing.
    pub fn conclude(self, choice: PlayerChoice) -> Result<Option<DuelReport>, DuelError> {
        let player_move = match choice {
            PlayerChoice::Quit => {
                debug!(session = %self.id, "aborted before adjudication");
                return Ok(None);
            }
            PlayerChoice::Move(index) => index,
        };

        let outcome = adjudicate(&self.catalog, player_move, self.computer_move)?;
        let player_name = self
            .catalog
            .name(player_move)
            .expect("adjudicate checked the range");
        let computer_name = self
            .catalog
            .name(self.computer_move)
            .expect("selector stays in catalog range");
        let verified = self.commitment.verify(computer_name, &self.secret_key);

        debug!(session = %self.id, %outcome, verified, "session resolved");

        Ok(Some(DuelReport {
            session_id: self.id,
            started_at: self.started_at,
            player_move: player_name.to_owned(),
            computer_move: computer_name.to_owned(),
            outcome,
            commitment: self.commitment.to_string(),
            secret_key: self.secret_key.to_string(),
            verified,
        }))
    }
}

// =============================================================================
// TESTS
// =============================================================================
