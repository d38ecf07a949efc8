use crate::commands::{AddBookmark, Command, CreateSchema, DeleteBookmark, ListBookmarks, Outcome};
use crate::db::{Bookmark, Db, SortColumn};
use crate::error::Result;
use crate::shell;
use clap::{Parser, Subcommand};

/// Fixed database filename, created in the current directory
pub const DB_FILENAME: &str = "bookmarks.db";

/// bark, a command-line bookmark manager
#[derive(Parser)]
#[command(name = "bark")]
#[command(about = "A command-line bookmark manager", long_about = None)]
struct Cli {
    /// Run without a subcommand to get the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a bookmark
    Add {
        /// Bookmark title
        title: String,
        /// Bookmark URL
        url: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List bookmarks
    List {
        /// Column to sort by, ascending
        #[arg(long, default_value_t = SortColumn::DateAdded)]
        sort: SortColumn,
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a bookmark
    Delete {
        /// Bookmark ID
        id: i64,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut db = Db::open(DB_FILENAME)?;
    CreateSchema.execute(&mut db)?;

    match cli.command {
        None => shell::run(&mut db)?,

        Some(Commands::Add { title, url, notes }) => {
            if let Outcome::Message(message) = (AddBookmark { title, url, notes }).execute(&mut db)?
            {
                println!("{message}");
            }
        }

        Some(Commands::List { sort, json }) => {
            if let Outcome::Listing(bookmarks) =
                (ListBookmarks { order_by: sort }).execute(&mut db)?
            {
                if json {
                    println!("{}", serde_json::to_string_pretty(&bookmarks)?);
                } else {
                    print_listing(&bookmarks);
                }
            }
        }

        Some(Commands::Delete { id }) => {
            if let Outcome::Message(message) = (DeleteBookmark { id }).execute(&mut db)? {
                println!("{message}");
            }
        }
    }

    db.close()
}

/// Print a bookmark listing in compact form
pub fn print_listing(bookmarks: &[Bookmark]) {
    if bookmarks.is_empty() {
        println!("No bookmarks yet.");
        return;
    }

    for bookmark in bookmarks {
        println!("  [#{:2}] {} ({})", bookmark.id, bookmark.title, bookmark.url);

        let notes = match bookmark.notes.as_deref() {
            Some(n) if !n.is_empty() => format!("  Notes: {n}"),
            _ => String::new(),
        };
        println!(
            "         Added: {}{}",
            Bookmark::format_datetime(&bookmark.date_added),
            notes
        );
    }
}
