//! Card use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.

use crate::model::card::{Card, CardDraft, CardId, StatField};
use crate::repo::card_repo::{
    CardRepository, Decision, DeleteOutcome, RepoResult, UpdateOutcome,
};

/// Use-case service wrapper for card CRUD operations.
pub struct CardService<R: CardRepository> {
    repo: R,
}

impl<R: CardRepository> CardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every card ordered by id ascending.
    pub fn list_cards(&self) -> RepoResult<Vec<Card>> {
        self.repo.list_all()
    }

    /// Validates and inserts a new card, returning its generated id.
    pub fn add_card(&self, draft: &CardDraft) -> RepoResult<CardId> {
        self.repo.insert(draft)
    }

    /// Stages a single-field stat edit and resolves it with the caller's
    /// commit/rollback decision.
    pub fn edit_stat<F>(
        &self,
        id: CardId,
        field: StatField,
        new_value: i64,
        confirm: F,
    ) -> RepoResult<UpdateOutcome>
    where
        F: FnOnce() -> Decision,
    {
        self.repo.update_stat(id, field, new_value, confirm)
    }

    /// Removes a card when `confirmed` is true.
    pub fn remove_card(&self, id: CardId, confirmed: bool) -> RepoResult<DeleteOutcome> {
        self.repo.delete(id, confirmed)
    }
}
