use monstars_core::{
    is_valid_name, is_valid_stat_value, Card, CardDraft, CardValidationError, StatField,
};

#[test]
fn stat_value_boundaries() {
    assert!(!is_valid_stat_value(0));
    assert!(is_valid_stat_value(1));
    assert!(is_valid_stat_value(20));
    assert!(!is_valid_stat_value(21));
    assert!(!is_valid_stat_value(-3));
}

#[test]
fn name_boundaries() {
    assert!(!is_valid_name(""));
    assert!(is_valid_name("A"));
    assert!(is_valid_name("FourteenChars!"));
    assert!(!is_valid_name("FifteenChars!!!"));
}

#[test]
fn name_length_counts_characters_not_bytes() {
    // 14 multibyte characters are within the display-width limit.
    let name: String = "é".repeat(14);
    assert!(is_valid_name(&name));
    let long: String = "é".repeat(15);
    assert!(!is_valid_name(&long));
}

#[test]
fn stat_field_parse_is_exact_lowercase() {
    assert_eq!(StatField::parse("strength"), Some(StatField::Strength));
    assert_eq!(StatField::parse("speed"), Some(StatField::Speed));
    assert_eq!(StatField::parse("stealth"), Some(StatField::Stealth));
    assert_eq!(StatField::parse("cunning"), Some(StatField::Cunning));
    assert_eq!(StatField::parse("Strength"), None);
    assert_eq!(StatField::parse("charisma"), None);
    assert_eq!(StatField::parse(""), None);
}

#[test]
fn stat_field_name_round_trips() {
    for field in StatField::ALL {
        assert_eq!(StatField::parse(field.as_str()), Some(field));
    }
}

#[test]
fn draft_validate_reports_empty_name() {
    let draft = CardDraft::new("", 10, 10, 10, 10);
    assert_eq!(draft.validate(), Err(CardValidationError::EmptyName));
}

#[test]
fn draft_validate_reports_overlong_name() {
    let draft = CardDraft::new("FifteenChars!!!", 10, 10, 10, 10);
    assert_eq!(
        draft.validate(),
        Err(CardValidationError::NameTooLong { len: 15 })
    );
}

#[test]
fn draft_validate_names_the_offending_stat() {
    let draft = CardDraft::new("Drake", 10, 21, 5, 8);
    assert_eq!(
        draft.validate(),
        Err(CardValidationError::StatOutOfRange {
            field: StatField::Speed,
            value: 21,
        })
    );
}

#[test]
fn draft_validate_accepts_boundary_values() {
    let draft = CardDraft::new("Drake", 1, 20, 1, 20);
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn card_validate_matches_draft_rules() {
    let card = Card {
        id: 1,
        name: "Drake".to_string(),
        strength: 10,
        speed: 12,
        stealth: 0,
        cunning: 8,
    };
    assert_eq!(
        card.validate(),
        Err(CardValidationError::StatOutOfRange {
            field: StatField::Stealth,
            value: 0,
        })
    );
}

#[test]
fn stat_accessor_returns_matching_field() {
    let draft = CardDraft::new("Drake", 10, 12, 5, 8);
    assert_eq!(draft.stat(StatField::Strength), 10);
    assert_eq!(draft.stat(StatField::Speed), 12);
    assert_eq!(draft.stat(StatField::Stealth), 5);
    assert_eq!(draft.stat(StatField::Cunning), 8);
}
