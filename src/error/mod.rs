//! Error types for the mock credential check.

use thiserror::Error;

/// Rejection reasons for a verification attempt.
///
/// Both variants are recoverable: the user fixes the form and resubmits.
/// The `Display` strings are shown verbatim in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Either field was missing or blank at evaluation time.
    #[error("name or password is empty")]
    EmptyCredential,

    /// Both fields were present but did not match the accepted pair.
    #[error("name or password is incorrect")]
    IncorrectCredential,
}
