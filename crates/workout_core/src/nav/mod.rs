//! Screen navigation for the workout log.
//!
//! # Responsibility
//! - Encode/decode the three-route surface (`list`, `create`, `edit/{id}`).
//! - Hold form drafts and per-field validation state.
//! - Map user actions to store mutations and screen transitions.
//!
//! # Invariants
//! - Exactly one screen is active at a time; the initial screen is the list.
//! - Store mutations happen only through navigator actions.

pub mod form;
pub mod navigator;
pub mod route;
