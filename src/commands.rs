//! The command layer: one uniform operation object per menu action,
//! composed on top of the generic data-access layer in [`crate::db`].

use crate::db::schema::{self, BOOKMARKS_TABLE};
use crate::db::{Bookmark, Criteria, Db, Record, SortColumn};
use crate::error::{Error, Result};

/// What a command hands back to its caller
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A human-readable status line
    Message(String),
    /// The full ordered bookmark listing
    Listing(Vec<Bookmark>),
    /// Sentinel telling the host loop to stop; no process control flow here
    Quit,
}

/// Uniform execute contract shared by every operation
pub trait Command {
    fn execute(&self, db: &mut Db) -> Result<Outcome>;
}

/// Idempotently ensure the bookmarks table exists
pub struct CreateSchema;

impl Command for CreateSchema {
    fn execute(&self, db: &mut Db) -> Result<Outcome> {
        schema::create_schema(db)?;
        Ok(Outcome::Message("Bookmarks table ready.".to_string()))
    }
}

/// Add a bookmark; `date_added` is stamped here, never user-supplied
pub struct AddBookmark {
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
}

impl Command for AddBookmark {
    fn execute(&self, db: &mut Db) -> Result<Outcome> {
        // The shell re-prompts for these, but a row without them would break
        // the table invariants, so refuse here as well.
        if self.title.trim().is_empty() {
            return Err(Error::missing_field("title"));
        }
        if self.url.trim().is_empty() {
            return Err(Error::missing_field("url"));
        }

        let record = Record::new()
            .with("title", self.title.clone())
            .with("url", self.url.clone())
            .with("notes", self.notes.clone())
            .with("date_added", Db::now());

        let id = db.insert(BOOKMARKS_TABLE, &record)?;
        Ok(Outcome::Message(format!("Bookmark #{id} added.")))
    }
}

/// List all bookmarks, ascending by the configured column
pub struct ListBookmarks {
    pub order_by: SortColumn,
}

impl Default for ListBookmarks {
    fn default() -> Self {
        ListBookmarks {
            order_by: SortColumn::DateAdded,
        }
    }
}

impl Command for ListBookmarks {
    fn execute(&self, db: &mut Db) -> Result<Outcome> {
        let rows = db.select(BOOKMARKS_TABLE, None, &[self.order_by.as_str()])?;
        let bookmarks = rows
            .iter()
            .map(|row| Bookmark::from_row(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Outcome::Listing(bookmarks))
    }
}

/// Delete a bookmark by id; a non-matching id is still a success
pub struct DeleteBookmark {
    pub id: i64,
}

impl Command for DeleteBookmark {
    fn execute(&self, db: &mut Db) -> Result<Outcome> {
        db.delete(BOOKMARKS_TABLE, &Criteria::new().with("id", self.id))?;
        Ok(Outcome::Message(format!("Bookmark #{} deleted.", self.id)))
    }
}

/// Ask the host loop to stop
pub struct Quit;

impl Command for Quit {
    fn execute(&self, _db: &mut Db) -> Result<Outcome> {
        Ok(Outcome::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn test_db() -> Db {
        let mut db = Db::in_memory().unwrap();
        CreateSchema.execute(&mut db).unwrap();
        db
    }

    fn listing(db: &mut Db, order_by: SortColumn) -> Vec<Bookmark> {
        match (ListBookmarks { order_by }).execute(db).unwrap() {
            Outcome::Listing(bookmarks) => bookmarks,
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn test_create_schema_twice() {
        let mut db = test_db();
        CreateSchema.execute(&mut db).unwrap();
    }

    #[test]
    fn test_add_then_list_roundtrip() {
        let mut db = test_db();
        let before = Utc::now();

        let outcome = AddBookmark {
            title: "Real Python".to_string(),
            url: "https://realpython.com".to_string(),
            notes: Some("Great resource".to_string()),
        }
        .execute(&mut db)
        .unwrap();
        assert_eq!(outcome, Outcome::Message("Bookmark #1 added.".to_string()));

        let bookmarks = listing(&mut db, SortColumn::DateAdded);
        assert_eq!(bookmarks.len(), 1);
        let bookmark = &bookmarks[0];
        assert_eq!(bookmark.id, 1);
        assert_eq!(bookmark.title, "Real Python");
        assert_eq!(bookmark.url, "https://realpython.com");
        assert_eq!(bookmark.notes.as_deref(), Some("Great resource"));

        // date_added is a well-formed timestamp stamped at insertion time
        let stamped = bookmark.date_added.parse::<DateTime<Utc>>().unwrap();
        assert!(stamped >= before - chrono::Duration::seconds(1));
        assert!(stamped <= Utc::now());
    }

    #[test]
    fn test_add_rejects_blank_required_fields() {
        let mut db = test_db();

        let err = AddBookmark {
            title: "  ".to_string(),
            url: "https://example.com".to_string(),
            notes: None,
        }
        .execute(&mut db)
        .unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "title" }));

        let err = AddBookmark {
            title: "Example".to_string(),
            url: String::new(),
            notes: None,
        }
        .execute(&mut db)
        .unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "url" }));

        assert!(listing(&mut db, SortColumn::DateAdded).is_empty());
    }

    #[test]
    fn test_list_sorted_by_title() {
        let mut db = test_db();
        for title in ["mozilla", "archive", "crates"] {
            AddBookmark {
                title: title.to_string(),
                url: format!("https://{title}.org"),
                notes: None,
            }
            .execute(&mut db)
            .unwrap();
        }

        let titles: Vec<String> = listing(&mut db, SortColumn::Title)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["archive", "crates", "mozilla"]);
    }

    #[test]
    fn test_delete_existing_removes_exactly_that_row() {
        let mut db = test_db();
        for title in ["keep", "drop"] {
            AddBookmark {
                title: title.to_string(),
                url: "https://example.com".to_string(),
                notes: None,
            }
            .execute(&mut db)
            .unwrap();
        }

        let drop_id = listing(&mut db, SortColumn::Id)
            .iter()
            .find(|b| b.title == "drop")
            .unwrap()
            .id;

        let outcome = DeleteBookmark { id: drop_id }.execute(&mut db).unwrap();
        assert_eq!(
            outcome,
            Outcome::Message(format!("Bookmark #{drop_id} deleted."))
        );

        let remaining = listing(&mut db, SortColumn::Id);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "keep");
    }

    #[test]
    fn test_delete_missing_id_is_silent_success() {
        let mut db = test_db();
        AddBookmark {
            title: "stays".to_string(),
            url: "https://example.com".to_string(),
            notes: None,
        }
        .execute(&mut db)
        .unwrap();

        let outcome = DeleteBookmark { id: 999 }.execute(&mut db).unwrap();
        assert_eq!(outcome, Outcome::Message("Bookmark #999 deleted.".to_string()));
        assert_eq!(listing(&mut db, SortColumn::Id).len(), 1);
    }

    #[test]
    fn test_quit_is_a_sentinel() {
        let mut db = test_db();
        assert_eq!(Quit.execute(&mut db).unwrap(), Outcome::Quit);
    }
}
