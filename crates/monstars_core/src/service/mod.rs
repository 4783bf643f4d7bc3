//! Use-case services orchestrating repository operations.
//!
//! # Responsibility
//! - Provide stable entry points for the interactive shell.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.

pub mod card_service;
