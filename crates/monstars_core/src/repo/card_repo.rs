//! Card repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the only write path to the persisted `cards` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate via the model before any SQL mutation.
//! - Stat edits are staged in an open transaction and become durable only
//!   on an explicit commit decision; an unresolved transaction rolls back.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{DbError, Store};
use crate::model::card::{
    is_valid_stat_value, Card, CardDraft, CardId, CardValidationError, StatField,
};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CARD_SELECT_SQL: &str = "SELECT id, name, strength, speed, stealth, cunning FROM cards";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for card persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CardValidationError),
    Db(DbError),
    NotFound(CardId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "card not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<CardValidationError> for RepoError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Caller decision resolving a staged stat edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Commit,
    Rollback,
}

/// Terminal state of a staged stat edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The field change is durable.
    Committed,
    /// The staged change was discarded; the prior value is intact.
    RolledBack,
}

/// Terminal state of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One row was removed.
    Removed,
    /// No row matched the id; a no-op, not a failure.
    NothingRemoved,
    /// The caller declined confirmation; the store was never touched.
    Cancelled,
}

/// Repository interface for card CRUD operations.
pub trait CardRepository {
    /// Returns every card ordered by id ascending.
    fn list_all(&self) -> RepoResult<Vec<Card>>;

    /// Validates and inserts a new card, returning its generated id.
    fn insert(&self, draft: &CardDraft) -> RepoResult<CardId>;

    /// Stages a single-field stat edit, then resolves it with the caller's
    /// decision.
    ///
    /// `confirm` is invoked while the transaction is pending; the shell
    /// blocks there for user input. Validation failures and missing ids are
    /// reported before `confirm` is ever called.
    fn update_stat<F>(
        &self,
        id: CardId,
        field: StatField,
        new_value: i64,
        confirm: F,
    ) -> RepoResult<UpdateOutcome>
    where
        F: FnOnce() -> Decision;

    /// Deletes a card when `confirmed` is true; otherwise reports
    /// [`DeleteOutcome::Cancelled`] without touching the store.
    fn delete(&self, id: CardId, confirmed: bool) -> RepoResult<DeleteOutcome>;
}

/// SQLite-backed card repository.
///
/// Owns a [`Store`] and opens one connection per operation.
pub struct SqliteCardRepository {
    store: Store,
}

impl SqliteCardRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl CardRepository for SqliteCardRepository {
    fn list_all(&self) -> RepoResult<Vec<Card>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{CARD_SELECT_SQL} ORDER BY id ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut cards = Vec::new();

            while let Some(row) = rows.next()? {
                cards.push(parse_card_row(row)?);
            }

            Ok(cards)
        })
    }

    fn insert(&self, draft: &CardDraft) -> RepoResult<CardId> {
        draft.validate()?;

        self.store.with_connection(|conn| {
            conn.execute(
                "INSERT INTO cards (name, strength, speed, stealth, cunning)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    draft.name.as_str(),
                    draft.strength,
                    draft.speed,
                    draft.stealth,
                    draft.cunning,
                ],
            )?;

            Ok(conn.last_insert_rowid())
        })
    }

    fn update_stat<F>(
        &self,
        id: CardId,
        field: StatField,
        new_value: i64,
        confirm: F,
    ) -> RepoResult<UpdateOutcome>
    where
        F: FnOnce() -> Decision,
    {
        if !is_valid_stat_value(new_value) {
            return Err(RepoError::Validation(CardValidationError::StatOutOfRange {
                field,
                value: new_value,
            }));
        }

        self.store.with_connection(|conn| {
            if !card_exists(conn, id)? {
                return Err(RepoError::NotFound(id));
            }

            // Dropping the transaction without an explicit resolution rolls
            // it back, so an error path can never silently commit.
            let tx = conn.transaction()?;

            // `field` is a closed enum whose names equal the column names;
            // only the value and id travel as bound parameters.
            tx.execute(
                &format!("UPDATE cards SET {} = ?1 WHERE id = ?2;", field.as_str()),
                params![new_value, id],
            )?;

            match confirm() {
                Decision::Commit => {
                    tx.commit()?;
                    Ok(UpdateOutcome::Committed)
                }
                Decision::Rollback => {
                    tx.rollback()?;
                    Ok(UpdateOutcome::RolledBack)
                }
            }
        })
    }

    fn delete(&self, id: CardId, confirmed: bool) -> RepoResult<DeleteOutcome> {
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.store.with_connection(|conn| {
            let changed = conn.execute("DELETE FROM cards WHERE id = ?1;", [id])?;

            Ok(if changed == 0 {
                DeleteOutcome::NothingRemoved
            } else {
                DeleteOutcome::Removed
            })
        })
    }
}

fn card_exists(conn: &Connection, id: CardId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM cards WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_card_row(row: &Row<'_>) -> RepoResult<Card> {
    let card = Card {
        id: row.get("id")?,
        name: row.get("name")?,
        strength: row.get("strength")?,
        speed: row.get("speed")?,
        stealth: row.get("stealth")?,
        cunning: row.get("cunning")?,
    };
    card.validate()?;
    Ok(card)
}
