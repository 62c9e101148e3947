//! Credential draft edited by the login form.

/// Which field of the draft a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Password,
}

/// The user definition edited in the login view.
///
/// Both fields start absent and are set field-by-field as the user types.
/// The fields are independent; there is no cross-field invariant. A field
/// counts as empty when it is absent or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    /// The name of the user.
    pub name: Option<String>,
    /// The password of the user.
    pub password: Option<String>,
}

impl CredentialDraft {
    /// Create an empty draft (both fields absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the named field. No validation; always succeeds.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = Some(value),
            Field::Password => self.password = Some(value),
        }
    }

    /// Current value of the named field, empty string if unset.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => self.name.as_deref().unwrap_or(""),
            Field::Password => self.password.as_deref().unwrap_or(""),
        }
    }

    /// True when the named field is absent or blank.
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).is_empty()
    }
}
