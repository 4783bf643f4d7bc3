//! Domain model for the card catalog.
//!
//! # Responsibility
//! - Define the canonical card record and its field constraints.
//! - Provide the single validation boundary consulted before any write.
//!
//! # Invariants
//! - Every persisted card satisfies the name and stat constraints.
//! - Stat columns are only addressable through the closed `StatField` set.

pub mod card;
