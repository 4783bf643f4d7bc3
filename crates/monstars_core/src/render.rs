//! Fixed-width table rendering for card listings.
//!
//! # Responsibility
//! - Turn a card sequence into a bordered, fixed-column text table.
//!
//! # Invariants
//! - Pure transform: no store access, no side effects.
//! - Header and borders are rendered even for an empty sequence.

use crate::model::card::Card;

const TOP_BORDER: &str = "╭────┬────────────────┬──────────┬─────────┬───────────┬─────────╮";
const HEADER_ROW: &str = "│ ID │ Name           │ Strength │  Speed  │  Stealth  │ Cunning │";
const HEADER_RULE: &str = "├────┼────────────────┼──────────┼─────────┼───────────┼─────────┤";
const BOTTOM_BORDER: &str = "╰────┴────────────────┴──────────┴─────────┴───────────┴─────────╯";

/// Renders cards as a fixed-column table.
///
/// Column order matches the persisted table: id, name, strength, speed,
/// stealth, cunning. Cell widths match the header so every row lines up.
pub fn render_cards(cards: &[Card]) -> String {
    let mut out = String::new();
    out.push_str(TOP_BORDER);
    out.push('\n');
    out.push_str(HEADER_ROW);
    out.push('\n');
    out.push_str(HEADER_RULE);
    out.push('\n');

    for card in cards {
        out.push_str(&format!(
            "│{:<4}│{:<16}│{:<10}│{:<9}│{:<11}│{:<9}│\n",
            card.id, card.name, card.strength, card.speed, card.stealth, card.cunning
        ));
    }

    out.push_str(BOTTOM_BORDER);
    out.push('\n');
    out
}
