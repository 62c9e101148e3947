//! Type definitions for the application state.
//!
//! Contains enums used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which form control has focus

use crate::auth::Field;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The editable login form (with optional error banner)
    #[default]
    Login,
    /// The non-editable welcome display after a successful check
    Welcome,
}

/// Represents which form control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Password,
    RememberMe,
    LoginButton,
}

impl Focus {
    /// Cycle to the next control (Tab / Down)
    pub fn next(&self) -> Self {
        match self {
            Focus::Name => Focus::Password,
            Focus::Password => Focus::RememberMe,
            Focus::RememberMe => Focus::LoginButton,
            Focus::LoginButton => Focus::Name,
        }
    }

    /// Cycle to the previous control (Shift+Tab / Up)
    pub fn prev(&self) -> Self {
        match self {
            Focus::Name => Focus::LoginButton,
            Focus::Password => Focus::Name,
            Focus::RememberMe => Focus::Password,
            Focus::LoginButton => Focus::RememberMe,
        }
    }

    /// The draft field this control edits, if it is a text input.
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Password => Some(Field::Password),
            Focus::RememberMe | Focus::LoginButton => None,
        }
    }
}
