//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate collection bookkeeping from service/navigation orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `WorkoutRecord::validate()` before
//!   mutating storage.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod record_repo;
