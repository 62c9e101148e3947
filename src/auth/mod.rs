//! Mock credential verification.
//!
//! There is no backend here: the check compares the draft against two fixed
//! literals after a simulated latency. See [`verifier`] for the attempt
//! state machine and [`credentials`] for the draft edited by the form.

pub mod credentials;
pub mod verifier;

pub use credentials::{CredentialDraft, Field};
pub use verifier::{
    evaluate, spawn_verification, PendingVerification, SessionToken, VerifyPhase, ACCEPTED_NAME,
    ACCEPTED_PASSWORD, SUCCESS_TOKEN,
};
