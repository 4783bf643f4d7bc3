//! Core domain logic for the Monstars card catalog.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use db::Store;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{
    is_valid_name, is_valid_stat_value, Card, CardDraft, CardId, CardValidationError, StatField,
    NAME_MAX_CHARS, STAT_MAX, STAT_MIN,
};
pub use render::render_cards;
pub use repo::card_repo::{
    CardRepository, Decision, DeleteOutcome, RepoError, RepoResult, SqliteCardRepository,
    UpdateOutcome,
};
pub use service::card_service::CardService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
