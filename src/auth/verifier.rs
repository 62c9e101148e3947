//! Mock verification timer.
//!
//! A verification attempt is a single spawned task that sleeps for a
//! randomized delay and then evaluates the credential draft captured at
//! submit time. The attempt is an explicit state machine:
//!
//! `Scheduled -> {SettledSuccess | SettledFailure | Cancelled}`
//!
//! Terminal phases are never left. Cancellation and evaluation contend for
//! the shared phase lock, so exactly one of them wins: a cancelled attempt
//! never evaluates and never delivers a settlement.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::auth::credentials::{CredentialDraft, Field};
use crate::error::VerifyError;

/// The one accepted name.
pub const ACCEPTED_NAME: &str = "MAINT";

/// The one accepted password.
pub const ACCEPTED_PASSWORD: &str = "safetyiskey";

/// The fixed token issued on a successful check.
pub const SUCCESS_TOKEN: &str = "a success token";

/// Simulated latency bounds, inclusive, in milliseconds.
const DELAY_MIN_MS: u64 = 100;
const DELAY_MAX_MS: u64 = 600;

/// Opaque token handed out by a successful verification.
///
/// Transient and display-only; it is never persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    fn issue() -> Self {
        Self(SUCCESS_TOKEN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phase of one verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyPhase {
    /// The delayed evaluation has been scheduled but has not fired.
    Scheduled,
    /// The evaluation ran and resolved with a token.
    SettledSuccess,
    /// The evaluation ran and rejected with a reason.
    SettledFailure,
    /// The attempt was cancelled before the evaluation ran.
    Cancelled,
}

/// Records the first settlement of an attempt; later calls are no-ops.
///
/// `reject` may be called any number of times but only the first rejection
/// is kept. `resolve` is terminal and yields the token only when no
/// rejection was recorded first.
struct SettleOnce {
    rejection: Option<VerifyError>,
}

impl SettleOnce {
    fn new() -> Self {
        Self { rejection: None }
    }

    fn reject(&mut self, err: VerifyError) {
        if self.rejection.is_none() {
            self.rejection = Some(err);
        }
    }

    fn resolve(self, token: SessionToken) -> Result<SessionToken, VerifyError> {
        match self.rejection {
            Some(err) => Err(err),
            None => Ok(token),
        }
    }
}

/// Evaluate a draft against the accepted pair.
///
/// Both rejection checks run unconditionally and the first one to fire
/// wins, so a draft that is both blank and mismatched rejects as empty.
pub fn evaluate(draft: &CredentialDraft) -> Result<SessionToken, VerifyError> {
    let mut settle = SettleOnce::new();
    if draft.is_blank(Field::Name) || draft.is_blank(Field::Password) {
        settle.reject(VerifyError::EmptyCredential);
    }
    if draft.get(Field::Name) != ACCEPTED_NAME || draft.get(Field::Password) != ACCEPTED_PASSWORD {
        settle.reject(VerifyError::IncorrectCredential);
    }
    settle.resolve(SessionToken::issue())
}

/// Handle to one in-flight verification attempt.
///
/// At most one of these exists per app instance; submitting again replaces
/// (and thereby cancels) the previous handle. Dropping the handle cancels
/// the attempt, which covers teardown.
#[derive(Debug)]
pub struct PendingVerification {
    attempt: u64,
    phase: Arc<Mutex<VerifyPhase>>,
    task: JoinHandle<()>,
}

impl PendingVerification {
    /// The attempt id this handle was spawned with.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Current phase of the attempt.
    pub fn phase(&self) -> VerifyPhase {
        *self.phase.lock().unwrap()
    }

    /// Cancel the attempt if it has not settled yet.
    ///
    /// Guarantees the evaluation never runs afterwards and no settlement
    /// message is ever delivered for this attempt. No-op once the attempt
    /// has settled or was already cancelled.
    pub fn cancel(&self) {
        let mut phase = self.phase.lock().unwrap();
        if *phase == VerifyPhase::Scheduled {
            *phase = VerifyPhase::Cancelled;
            self.task.abort();
            tracing::debug!(attempt = self.attempt, "verification attempt cancelled");
        }
    }
}

impl Drop for PendingVerification {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule a verification of `draft` after a randomized delay.
///
/// The draft is a snapshot: edits made after submit do not affect this
/// attempt. The settlement arrives on `tx` as
/// [`AppMessage::VerificationSettled`] tagged with `attempt`.
pub fn spawn_verification(
    draft: CredentialDraft,
    attempt: u64,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> PendingVerification {
    let delay = pick_delay();
    tracing::debug!(
        attempt,
        delay_ms = delay.as_millis() as u64,
        "verification attempt scheduled"
    );

    let phase = Arc::new(Mutex::new(VerifyPhase::Scheduled));
    let task_phase = Arc::clone(&phase);

    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let outcome = {
            let mut phase = task_phase.lock().unwrap();
            if *phase != VerifyPhase::Scheduled {
                // Cancelled while we held the timer; never evaluate.
                return;
            }
            let outcome = evaluate(&draft);
            *phase = match &outcome {
                Ok(_) => VerifyPhase::SettledSuccess,
                Err(_) => VerifyPhase::SettledFailure,
            };
            outcome
        };

        match &outcome {
            Ok(_) => tracing::info!(attempt, "verification resolved"),
            Err(err) => tracing::info!(attempt, %err, "verification rejected"),
        }

        // Receiver gone means the app is shutting down; nothing to do.
        let _ = tx.send(AppMessage::VerificationSettled { attempt, outcome });
    });

    PendingVerification {
        attempt,
        phase,
        task,
    }
}

fn pick_delay() -> Duration {
    let mut rng = rand::rng();
    Duration::from_millis(rng.random_range(DELAY_MIN_MS..=DELAY_MAX_MS))
}

// ============================================================================
// Tests
// ============================================================================
