//! Domain model for the workout log.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil `RecordId`.
//! - Deletion is a hard removal from the live collection.

pub mod record;
