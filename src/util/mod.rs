//! Browser glue shared by pages and state holders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here compiles on native targets with inert stubs so the pure
//! state and validation logic stays testable without a browser.

pub mod auth;
pub mod browser;
pub mod dark_mode;
pub mod ui_persistence;
