//! Gatehouse - a terminal login form with a mocked credential check
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod auth;
pub mod error;
pub mod ui;
