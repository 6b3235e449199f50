//! Application state: session identity, theme rules, settings drafts, the
//! Telegram sub-flow, and the typed event bus.
//!
//! ARCHITECTURE
//! ============
//! State types are plain structs with pure transition functions; pages hold
//! them in `RwSignal`s provided via context from the app root. Keeping the
//! logic signal-free makes every rule here testable on the host.

pub mod events;
pub mod session;
pub mod settings;
pub mod telegram;
pub mod theme;
