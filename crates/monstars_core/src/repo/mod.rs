//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for cards.
//! - Isolate SQLite query details from shell/service orchestration.
//!
//! # Invariants
//! - Repository writes must pass model validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Declined confirmations are outcomes, never errors.

pub mod card_repo;
