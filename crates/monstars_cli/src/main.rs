//! Interactive terminal shell for the Monstars card catalog.
//!
//! # Responsibility
//! - Own all prompts, re-prompt loops and user-facing text.
//! - Obtain confirmation decisions and hand them to the core as values.
//!
//! The core validates once per call and returns typed errors; every loop
//! that re-asks on bad input lives here.

use monstars_core::{
    default_log_level, init_logging, is_valid_name, is_valid_stat_value, render_cards, CardDraft,
    CardId, CardService, Decision, DeleteOutcome, RepoError, SqliteCardRepository, StatField,
    Store, UpdateOutcome, NAME_MAX_CHARS, STAT_MAX, STAT_MIN,
};
use std::io::{self, BufRead, Write};

const DEFAULT_DB_PATH: &str = "monstars.db";

fn main() {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let log_dir = std::env::temp_dir().join("monstars").join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let service = CardService::new(SqliteCardRepository::new(Store::new(&db_path)));

    loop {
        clear_screen();
        println!("-- Monstars --\n");
        println!("    1. Display all cards");
        println!("    2. Add card");
        println!("    3. Edit card");
        println!("    4. Remove card");
        println!("    5. Exit");

        let Some(choice) = prompt(": ") else { return };
        match choice.trim() {
            "1" => display_cards(&service),
            "2" => add_card(&service),
            "3" => edit_card(&service),
            "4" => remove_card(&service),
            "5" => return,
            _ => {
                println!("Pick an option between 1 and 5");
                pause();
            }
        }
    }
}

fn display_cards(service: &CardService<SqliteCardRepository>) {
    match service.list_cards() {
        Ok(cards) => print!("{}", render_cards(&cards)),
        Err(err) => println!("Could not read cards: {err}"),
    }
    pause();
}

fn add_card(service: &CardService<SqliteCardRepository>) {
    println!("-- Add card --\n");

    let Some(name) = prompt_name() else { return };
    let Some(strength) = prompt_stat(StatField::Strength) else {
        return;
    };
    let Some(speed) = prompt_stat(StatField::Speed) else {
        return;
    };
    let Some(stealth) = prompt_stat(StatField::Stealth) else {
        return;
    };
    let Some(cunning) = prompt_stat(StatField::Cunning) else {
        return;
    };

    let draft = CardDraft::new(name, strength, speed, stealth, cunning);
    match service.add_card(&draft) {
        Ok(id) => println!("Card added with ID {id}"),
        Err(err) => println!("Could not add card: {err}"),
    }
    pause();
}

fn edit_card(service: &CardService<SqliteCardRepository>) {
    println!("-- Edit card --\n");

    let Some(id) = prompt_card_id(service) else {
        return;
    };
    let Some(field) = prompt_stat_field() else { return };
    let Some(new_value) = prompt_stat(field) else {
        return;
    };

    let result = service.edit_stat(id, field, new_value, || {
        match prompt_yes_no("Commit this change? (y/n): ") {
            Some(true) => Decision::Commit,
            // EOF counts as declining; the staged change must not land.
            Some(false) | None => Decision::Rollback,
        }
    });

    match result {
        Ok(UpdateOutcome::Committed) => println!("Change committed"),
        Ok(UpdateOutcome::RolledBack) => println!("Change rolled back, nothing committed"),
        Err(RepoError::NotFound(id)) => println!("No card with ID {id}"),
        Err(err) => println!("Could not edit card: {err}"),
    }
    pause();
}

fn remove_card(service: &CardService<SqliteCardRepository>) {
    println!("-- Remove card --\n");

    let Some(id) = prompt_card_id(service) else {
        return;
    };
    let confirmed =
        prompt_yes_no("Are you sure you want to remove this card? (y/n): ").unwrap_or(false);

    match service.remove_card(id, confirmed) {
        Ok(DeleteOutcome::Removed) => println!("Card removed"),
        Ok(DeleteOutcome::NothingRemoved) => println!("Nothing removed"),
        Ok(DeleteOutcome::Cancelled) => println!("Operation cancelled"),
        Err(err) => println!("Could not remove card: {err}"),
    }
    pause();
}

/// Asks for a card id; `?` (or an empty line) lists all cards first.
fn prompt_card_id(service: &CardService<SqliteCardRepository>) -> Option<CardId> {
    loop {
        let line = prompt("Enter the card's ID (enter ? to see all cards): ")?;
        let line = line.trim();

        if line.is_empty() || line == "?" {
            display_cards_inline(service);
            continue;
        }

        match line.parse::<CardId>() {
            Ok(id) => return Some(id),
            Err(_) => println!("Enter a number or '?'"),
        }
    }
}

fn display_cards_inline(service: &CardService<SqliteCardRepository>) {
    match service.list_cards() {
        Ok(cards) => print!("{}", render_cards(&cards)),
        Err(err) => println!("Could not read cards: {err}"),
    }
}

fn prompt_name() -> Option<String> {
    loop {
        let name = prompt("Enter the card's name: ")?;
        let name = name.trim().to_string();
        if is_valid_name(&name) {
            return Some(name);
        }
        println!("Name must be 1 to {NAME_MAX_CHARS} characters");
    }
}

fn prompt_stat(field: StatField) -> Option<i64> {
    loop {
        let line = prompt(&format!("Enter a {field} value: "))?;
        match line.trim().parse::<i64>() {
            Ok(value) if is_valid_stat_value(value) => return Some(value),
            _ => println!("Try a whole number between {STAT_MIN} and {STAT_MAX}"),
        }
    }
}

fn prompt_stat_field() -> Option<StatField> {
    loop {
        let line = prompt("Which stat do you want to edit? (strength, speed, stealth, cunning): ")?;
        match StatField::parse(&line.trim().to_ascii_lowercase()) {
            Some(field) => return Some(field),
            None => println!("Must be one of the stats named"),
        }
    }
}

fn prompt_yes_no(question: &str) -> Option<bool> {
    loop {
        let line = prompt(question)?;
        match line.trim().to_ascii_lowercase().as_str() {
            "y" => return Some(true),
            "n" => return Some(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Prints a prompt and reads one line; `None` on EOF.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn pause() {
    let _ = prompt("\nPress enter to continue...");
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}
