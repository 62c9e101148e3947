//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which form control has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! [`App`] is the form state holder: it owns the credential draft, the
//! verification outcome, the remember-me flag, and the handle to any
//! in-flight verification. All of it lives and dies with the running view.

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Screen};

use tokio::sync::mpsc;

use crate::auth::{spawn_verification, CredentialDraft, Field, PendingVerification, SessionToken};
use crate::error::VerifyError;

/// Result of the most recent verification attempt, as seen by the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationOutcome {
    /// No attempt has settled yet.
    #[default]
    Pending,
    /// The last attempt resolved; the token is held for display only.
    Success { token: SessionToken },
    /// The last attempt rejected; the reason is shown in the error banner.
    Failure { reason: String },
}

/// Main application state
pub struct App {
    /// Credential draft edited by the form
    pub draft: CredentialDraft,
    /// Outcome of the most recent settled attempt
    pub outcome: VerificationOutcome,
    /// Remember-me toggle (display state only, nothing is persisted)
    pub remember_me: bool,
    /// Which form control has focus
    pub focus: Focus,
    /// Current screen being displayed
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: draw on the next loop iteration
    pub needs_redraw: bool,
    /// Handle to the in-flight verification, if any (at most one)
    pub pending: Option<PendingVerification>,
    /// Receiver for async messages (taken by the event loop for select!)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Monotonic id handed to each spawned attempt
    attempt_counter: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a fresh app with an empty draft and no outcome.
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            draft: CredentialDraft::new(),
            outcome: VerificationOutcome::Pending,
            remember_me: false,
            focus: Focus::default(),
            screen: Screen::default(),
            should_quit: false,
            needs_redraw: true,
            pending: None,
            message_rx: Some(message_rx),
            message_tx,
            attempt_counter: 0,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request application exit. Cancels any in-flight verification.
    pub fn quit(&mut self) {
        // Dropping the handle cancels the attempt, so a late settlement
        // can never touch state after teardown.
        self.pending = None;
        self.should_quit = true;
    }

    /// Set the named draft field. No validation; always succeeds.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.mark_dirty();
    }

    /// Flip the remember-me toggle.
    pub fn toggle_remember_me(&mut self) {
        self.remember_me = !self.remember_me;
        self.mark_dirty();
    }

    /// True while a verification attempt is in flight.
    pub fn is_verifying(&self) -> bool {
        self.pending.is_some()
    }

    /// The error reason to show in the banner, if the last attempt rejected.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            VerificationOutcome::Failure { reason } => Some(reason),
            _ => None,
        }
    }

    /// Submit the current draft for verification.
    ///
    /// Any prior in-flight attempt is cancelled first and its settlement is
    /// never observed; only the newest attempt can reach
    /// [`Self::on_verification_settled`].
    pub fn submit(&mut self) {
        if let Some(prior) = self.pending.take() {
            prior.cancel();
        }

        self.attempt_counter += 1;
        let attempt = self.attempt_counter;
        tracing::info!(attempt, "submitting credentials for verification");

        self.pending = Some(spawn_verification(
            self.draft.clone(),
            attempt,
            self.message_tx.clone(),
        ));
        self.mark_dirty();
    }

    /// Handle a settlement delivered over the message channel.
    pub fn on_verification_settled(
        &mut self,
        attempt: u64,
        outcome: Result<SessionToken, VerifyError>,
    ) {
        // Guard: only the attempt we are actually waiting on may settle.
        let waiting_on = self.pending.as_ref().map(PendingVerification::attempt);
        if waiting_on != Some(attempt) {
            tracing::debug!(attempt, "discarding settlement from superseded attempt");
            return;
        }
        self.pending = None;

        match outcome {
            Ok(token) => {
                self.outcome = VerificationOutcome::Success { token };
                self.screen = Screen::Welcome;
            }
            Err(err) => {
                self.outcome = VerificationOutcome::Failure {
                    reason: err.to_string(),
                };
            }
        }
        self.mark_dirty();
    }

    /// Dispatch an async message to its handler.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::VerificationSettled { attempt, outcome } => {
                self.on_verification_settled(attempt, outcome)
            }
        }
    }
}
