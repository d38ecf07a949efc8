//! Interactive lettered menu. Collects and validates user input, then hands
//! a command object to the command layer and renders whatever comes back.

use crate::commands::{AddBookmark, Command, DeleteBookmark, ListBookmarks, Outcome, Quit};
use crate::db::{Db, SortColumn};
use crate::error::Result;
use std::io::{self, BufRead, Write};

/// One entry in the lettered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    ListByDate,
    ListByTitle,
    Delete,
    Quit,
}

/// Run the menu loop until Quit or end of input
pub fn run(db: &mut Db) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to Bark!");

    loop {
        println!();
        print_menu();

        let Some(line) = prompt(&mut input, "Choose an option")? else {
            break;
        };
        let Some(choice) = parse_choice(&line) else {
            println!("Invalid choice");
            continue;
        };

        let command: Box<dyn Command> = match choice {
            MenuChoice::Add => {
                let Some(title) = prompt_required(&mut input, "Title")? else {
                    break;
                };
                let Some(url) = prompt_required(&mut input, "URL")? else {
                    break;
                };
                let Some(notes) = prompt(&mut input, "Notes")? else {
                    break;
                };
                let notes = if notes.is_empty() { None } else { Some(notes) };
                Box::new(AddBookmark { title, url, notes })
            }
            MenuChoice::ListByDate => Box::new(ListBookmarks::default()),
            MenuChoice::ListByTitle => Box::new(ListBookmarks {
                order_by: SortColumn::Title,
            }),
            MenuChoice::Delete => {
                let Some(id) = prompt_bookmark_id(&mut input)? else {
                    break;
                };
                Box::new(DeleteBookmark { id })
            }
            MenuChoice::Quit => Box::new(Quit),
        };

        match command.execute(db)? {
            Outcome::Message(message) => println!("{message}"),
            Outcome::Listing(bookmarks) => crate::cli::print_listing(&bookmarks),
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn print_menu() {
    println!("(A) Add bookmark");
    println!("(B) List bookmarks by date");
    println!("(T) List bookmarks by title");
    println!("(D) Delete a bookmark");
    println!("(Q) Quit");
}

/// Map a menu line to a choice, case-insensitively
fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().to_ascii_uppercase().as_str() {
        "A" => Some(MenuChoice::Add),
        "B" => Some(MenuChoice::ListByDate),
        "T" => Some(MenuChoice::ListByTitle),
        "D" => Some(MenuChoice::Delete),
        "Q" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Prompt once. Returns None at end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until a non-empty value is entered. Returns None at end of input.
fn prompt_required(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    loop {
        match prompt(input, label)? {
            None => return Ok(None),
            Some(value) if value.is_empty() => continue,
            Some(value) => return Ok(Some(value)),
        }
    }
}

/// Prompt until the entered id parses. Returns None at end of input.
fn prompt_bookmark_id(input: &mut impl BufRead) -> Result<Option<i64>> {
    loop {
        let Some(value) = prompt_required(input, "Enter a bookmark ID to delete")? else {
            return Ok(None);
        };
        match value.parse::<i64>() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => println!("Invalid ID"),
        }
    }
}
