use crate::error::{Error, Result};
use chrono::DateTime;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

use super::schema::BOOKMARKS_TABLE;

/// A stored bookmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date_added: String,
}

impl Bookmark {
    /// Build a bookmark from a full-row column tuple, in table column order
    pub fn from_row(row: &[Value]) -> Result<Self> {
        match row {
            [Value::Integer(id), Value::Text(title), Value::Text(url), notes, Value::Text(date_added)] => {
                let notes = match notes {
                    Value::Text(s) => Some(s.clone()),
                    _ => None,
                };
                Ok(Bookmark {
                    id: *id,
                    title: title.clone(),
                    url: url.clone(),
                    notes,
                    date_added: date_added.clone(),
                })
            }
            _ => Err(Error::malformed_row(BOOKMARKS_TABLE)),
        }
    }

    /// Get the display time for a stored timestamp
    pub fn format_datetime(s: &str) -> String {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => s.to_string(),
        }
    }
}

/// Sortable bookmark column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    Title,
    Url,
    Notes,
    #[default]
    DateAdded,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Title => "title",
            SortColumn::Url => "url",
            SortColumn::Notes => "notes",
            SortColumn::DateAdded => "date_added",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(SortColumn::Id),
            "title" => Ok(SortColumn::Title),
            "url" => Ok(SortColumn::Url),
            "notes" => Ok(SortColumn::Notes),
            "date_added" => Ok(SortColumn::DateAdded),
            _ => Err(Error::invalid_sort_column(s)),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_roundtrip() {
        for name in ["id", "title", "url", "notes", "date_added"] {
            assert_eq!(SortColumn::from_str(name).unwrap().as_str(), name);
        }
        assert!(matches!(
            SortColumn::from_str("created_at"),
            Err(Error::InvalidSortColumn { .. })
        ));
    }

    #[test]
    fn test_from_row_maps_null_notes() {
        let row = vec![
            Value::Integer(1),
            Value::Text("Example".into()),
            Value::Text("https://example.com".into()),
            Value::Null,
            Value::Text("2026-08-25T12:00:00Z".into()),
        ];
        let bookmark = Bookmark::from_row(&row).unwrap();
        assert_eq!(bookmark.id, 1);
        assert_eq!(bookmark.notes, None);
    }

    #[test]
    fn test_from_row_rejects_short_rows() {
        let row = vec![Value::Integer(1), Value::Text("Example".into())];
        assert!(matches!(
            Bookmark::from_row(&row),
            Err(Error::MalformedRow { .. })
        ));
    }
}
