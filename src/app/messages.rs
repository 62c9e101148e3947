//! AppMessage enum for async communication within the application.

use crate::auth::SessionToken;
use crate::error::VerifyError;

/// Messages received from async operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A verification attempt settled.
    ///
    /// `attempt` identifies which submit this settlement belongs to so the
    /// app can discard settlements from superseded attempts.
    VerificationSettled {
        attempt: u64,
        outcome: Result<SessionToken, VerifyError>,
    },
}
