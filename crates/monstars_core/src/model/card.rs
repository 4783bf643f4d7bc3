//! Card domain model and validation boundary.
//!
//! # Responsibility
//! - Define the card record shape shared by persistence and rendering.
//! - Enforce field constraints once, before any SQL mutation.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another card.
//! - `name` is non-empty and at most [`NAME_MAX_CHARS`] characters.
//! - Every stat value lies in `[STAT_MIN, STAT_MAX]`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable row identifier for a persisted card.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CardId = i64;

/// Maximum card name length in characters (display-width constraint).
pub const NAME_MAX_CHARS: usize = 14;

/// Inclusive lower bound for every stat value.
pub const STAT_MIN: i64 = 1;

/// Inclusive upper bound for every stat value.
pub const STAT_MAX: i64 = 20;

/// Selector for the four mutable stat columns of a card.
///
/// This is the only way to name a stat in repository APIs, so an
/// unvalidated column name can never reach SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Strength,
    Speed,
    Stealth,
    Cunning,
}

impl StatField {
    /// All stat fields in canonical column order.
    pub const ALL: [StatField; 4] = [
        StatField::Strength,
        StatField::Speed,
        StatField::Stealth,
        StatField::Cunning,
    ];

    /// Parses a canonical lowercase stat name.
    ///
    /// Comparison is exact; case normalization is the caller's job.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "strength" => Some(Self::Strength),
            "speed" => Some(Self::Speed),
            "stealth" => Some(Self::Stealth),
            "cunning" => Some(Self::Cunning),
            _ => None,
        }
    }

    /// Canonical lowercase name, identical to the table column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Stealth => "stealth",
            Self::Cunning => "cunning",
        }
    }
}

impl Display for StatField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether `value` is a legal stat value.
pub fn is_valid_stat_value(value: i64) -> bool {
    (STAT_MIN..=STAT_MAX).contains(&value)
}

/// Returns whether `name` is a legal card name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= NAME_MAX_CHARS
}

/// Field-level constraint violation detected before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyName,
    NameTooLong { len: usize },
    StatOutOfRange { field: StatField, value: i64 },
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "card name must not be empty"),
            Self::NameTooLong { len } => write!(
                f,
                "card name is {len} characters, maximum is {NAME_MAX_CHARS}"
            ),
            Self::StatOutOfRange { field, value } => write!(
                f,
                "{field} value {value} is outside [{STAT_MIN}, {STAT_MAX}]"
            ),
        }
    }
}

impl Error for CardValidationError {}

/// User-supplied card fields before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub name: String,
    pub strength: i64,
    pub speed: i64,
    pub stealth: i64,
    pub cunning: i64,
}

impl CardDraft {
    pub fn new(
        name: impl Into<String>,
        strength: i64,
        speed: i64,
        stealth: i64,
        cunning: i64,
    ) -> Self {
        Self {
            name: name.into(),
            strength,
            speed,
            stealth,
            cunning,
        }
    }

    /// Returns the draft value for one stat field.
    pub fn stat(&self, field: StatField) -> i64 {
        match field {
            StatField::Strength => self.strength,
            StatField::Speed => self.speed,
            StatField::Stealth => self.stealth,
            StatField::Cunning => self.cunning,
        }
    }

    /// Checks every field constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        validate_fields(&self.name, |field| self.stat(field))
    }
}

/// Canonical persisted card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Store-assigned row id, stable for the record lifetime.
    pub id: CardId,
    pub name: String,
    pub strength: i64,
    pub speed: i64,
    pub stealth: i64,
    pub cunning: i64,
}

impl Card {
    /// Returns the value of one stat field.
    pub fn stat(&self, field: StatField) -> i64 {
        match field {
            StatField::Strength => self.strength,
            StatField::Speed => self.speed,
            StatField::Stealth => self.stealth,
            StatField::Cunning => self.cunning,
        }
    }

    /// Checks every field constraint, reporting the first violation.
    ///
    /// Read paths use this to reject invalid persisted state instead of
    /// masking it.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        validate_fields(&self.name, |field| self.stat(field))
    }
}

fn validate_fields(
    name: &str,
    stat: impl Fn(StatField) -> i64,
) -> Result<(), CardValidationError> {
    if name.is_empty() {
        return Err(CardValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(CardValidationError::NameTooLong { len });
    }
    for field in StatField::ALL {
        let value = stat(field);
        if !is_valid_stat_value(value) {
            return Err(CardValidationError::StatOutOfRange { field, value });
        }
    }
    Ok(())
}
