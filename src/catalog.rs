use std::collections::HashMap;

use crate::errors::{ReferenceError, Result};
use crate::types::{Book, BookId, Version};

/// Read-only index of one version's books with alias lookup.
///
/// Built once from a bulk-loaded book list and never mutated afterward, so a
/// constructed catalog can be shared across threads freely. The lower-cased
/// alias table and the id index are precomputed at construction.
#[derive(Debug, Clone)]
pub struct BookCatalog {
    version: Version,
    books: Vec<Book>,
    /// Lower-cased `[title, alt, abbr]` per book, in catalog order.
    aliases: Vec<[String; 3]>,
    by_id: HashMap<BookId, usize>,
}

impl BookCatalog {
    pub fn new(version: Version, books: Vec<Book>) -> BookCatalog {
        let aliases = books
            .iter()
            .map(|book| {
                [
                    book.title.to_lowercase(),
                    book.alt.to_lowercase(),
                    book.abbr.to_lowercase(),
                ]
            })
            .collect();
        let by_id = books
            .iter()
            .enumerate()
            .map(|(position, book)| (book.id, position))
            .collect();

        BookCatalog {
            version,
            books,
            aliases,
            by_id,
        }
    }

    /// Loads a catalog from a JSON book array, the persisted form the bulk
    /// loader supplies.
    pub fn from_json(version: Version, json: &str) -> Result<BookCatalog> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        if books.is_empty() {
            return Err(ReferenceError::Catalog {
                message: "empty book list".to_string(),
                version: version.identifier.clone(),
            });
        }
        Ok(BookCatalog::new(version, books))
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Case-insensitive prefix lookup against `title`, `alt` and `abbr`.
    ///
    /// Books are scanned in catalog-declared order and the first book any of
    /// whose three fields starts with the trimmed, lower-cased query wins.
    /// An empty query matches nothing (a bare prefix scan would otherwise
    /// return the first book of the canon).
    pub fn find_by_name(&self, name: &str) -> Option<&Book> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.aliases
            .iter()
            .position(|[title, alt, abbr]| {
                title.starts_with(&query)
                    || alt.starts_with(&query)
                    || abbr.starts_with(&query)
            })
            .map(|position| &self.books[position])
    }

    /// Direct lookup by stable identifier.
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.by_id.get(&id).map(|&position| &self.books[position])
    }
}
