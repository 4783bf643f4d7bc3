use monstars_core::{render_cards, Card};

fn card(id: i64, name: &str, strength: i64, speed: i64, stealth: i64, cunning: i64) -> Card {
    Card {
        id,
        name: name.to_string(),
        strength,
        speed,
        stealth,
        cunning,
    }
}

#[test]
fn empty_list_still_renders_header_and_borders() {
    let out = render_cards(&[]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with('╭'));
    assert!(lines[1].contains("ID"));
    assert!(lines[1].contains("Cunning"));
    assert!(lines[2].starts_with('├'));
    assert!(lines[3].starts_with('╰'));
}

#[test]
fn rows_are_padded_to_fixed_widths() {
    let out = render_cards(&[card(1, "Drake", 10, 12, 5, 8)]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[3],
        "│1   │Drake           │10        │12       │5          │8        │"
    );
}

#[test]
fn every_line_has_the_same_display_width() {
    let out = render_cards(&[
        card(1, "Drake", 10, 12, 5, 8),
        card(42, "D'Artagnan", 14, 15, 9, 17),
        card(777, "FourteenChars!", 20, 20, 20, 20),
    ]);

    let widths: Vec<usize> = out.lines().map(|line| line.chars().count()).collect();
    assert!(!widths.is_empty());
    assert!(
        widths.iter().all(|w| *w == widths[0]),
        "ragged table: {widths:?}"
    );
}

#[test]
fn rows_appear_in_input_order() {
    let out = render_cards(&[card(2, "Imp", 3, 18, 16, 11), card(1, "Drake", 10, 12, 5, 8)]);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[3].contains("Imp"));
    assert!(lines[4].contains("Drake"));
}

#[test]
fn maximum_length_name_fits_its_cell() {
    let out = render_cards(&[card(1, "FourteenChars!", 1, 1, 1, 1)]);
    let row = out.lines().nth(3).unwrap();

    assert!(row.contains("│FourteenChars!  │"));
}
