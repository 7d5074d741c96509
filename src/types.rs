use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ReferenceError, Result};

/// Stable per-version identifier of a book.
pub type BookId = u32;
/// 1-based chapter index within a book.
pub type ChapterIndex = u32;
/// 1-based verse index within a chapter.
pub type VerseIndex = u32;

/// A Bible translation/edition, identified by a short code and optional locale.
///
/// Parsed from identifiers of the form `"KJV:en_US"` or plain `"kjv"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub identifier: String,
    pub name: String,
    pub locale: Option<String>,
}

impl Version {
    /// Parses a version identifier in the `CODE` or `CODE:LOCALE` form.
    ///
    /// The code is normalized: `identifier` is lower-cased and `name` is
    /// upper-cased regardless of the input casing.
    pub fn new(identifier: &str) -> Version {
        match identifier.split_once(':') {
            Some((code, locale)) => Version {
                identifier: code.to_lowercase(),
                name: code.to_uppercase(),
                locale: Some(locale.to_string()),
            },
            None => Version {
                identifier: identifier.to_lowercase(),
                name: identifier.to_uppercase(),
                locale: None,
            },
        }
    }
}

impl From<&str> for Version {
    fn from(identifier: &str) -> Version {
        Version::new(identifier)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}",
            self.identifier,
            self.name,
            self.locale.as_deref().unwrap_or("none")
        )
    }
}

/// A span within a book: a set of chapters plus an optional set of verses.
///
/// An empty `verses` set means "all verses of the given chapter(s)". A
/// non-empty `verses` set is only meaningful when `chapters` holds exactly
/// one chapter; consumers that need verse-level expansion must go through
/// [`Location::span`], which enforces that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub chapters: BTreeSet<ChapterIndex>,
    pub verses: BTreeSet<VerseIndex>,
}

/// Borrowed view of a [`Location`] suitable for verse-store lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSpan<'a> {
    /// Whole chapter(s): every verse of every listed chapter.
    Chapters(&'a BTreeSet<ChapterIndex>),
    /// Specific verses within a single chapter.
    Verses {
        chapter: ChapterIndex,
        verses: &'a BTreeSet<VerseIndex>,
    },
}

impl Location {
    /// Splits the location into a chapter-level or verse-level span.
    ///
    /// Returns [`ReferenceError::InvalidLocation`] when a multi-chapter set
    /// is combined with an explicit verse set. That shape cannot be produced
    /// by the grammar but can be constructed by hand, and must fail loudly
    /// here rather than yield a truncated verse list downstream.
    pub fn span(&self) -> Result<LocationSpan<'_>> {
        if self.verses.is_empty() {
            return Ok(LocationSpan::Chapters(&self.chapters));
        }
        match self.chapters.first() {
            Some(&chapter) if self.chapters.len() == 1 => Ok(LocationSpan::Verses {
                chapter,
                verses: &self.verses,
            }),
            _ => Err(ReferenceError::InvalidLocation {
                chapter_count: self.chapters.len(),
            }),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chapters = join(&self.chapters, ",");
        let verses = join(&self.verses, ",");
        write!(f, "{}:{}", chapters, verses)
    }
}

/// An unresolved parse result: the book name exactly as it appeared in the
/// source text (any casing, any locale, possibly wrong) plus the locations
/// that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawReference {
    pub book_name: String,
    pub locations: BTreeSet<Location>,
}

/// A canonical book entry owned by one version's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Book {
    /// Stable per-version identifier.
    pub id: BookId,
    /// Ordinal position within the version.
    pub index: u32,
    /// Full title, e.g. `"Genesis"`.
    pub title: String,
    /// Alternate full name.
    pub alt: String,
    /// Abbreviation, e.g. `"Ge"`.
    pub abbr: String,
    pub chapters_count: u32,
}

/// A reference bound to a concrete catalog book.
///
/// Ordered primarily by `book.id` so collections of references iterate and
/// display in a stable canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub book: Book,
    pub locations: BTreeSet<Location>,
}

impl Reference {
    pub fn title(&self) -> &str {
        &self.book.title
    }

    /// First chapter of the first location, defaulting to 1.
    pub fn first_chapter(&self) -> ChapterIndex {
        self.locations
            .first()
            .and_then(|location| location.chapters.first().copied())
            .unwrap_or(1)
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.book
            .id
            .cmp(&other.book.id)
            .then_with(|| self.book.cmp(&other.book))
            .then_with(|| self.locations.cmp(&other.locations))
    }
}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Reference {
    /// Renders the human form, e.g. `"Genesis 1:1-10"` or `"2 Cor 1, 2"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locations = self
            .locations
            .iter()
            .map(|location| {
                let chapters = format_set(&location.chapters);
                match format_set(&location.verses) {
                    s if s.is_empty() => chapters,
                    verses => format!("{}:{}", chapters, verses),
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{} {}", self.book.title, locations)
    }
}

/// A resolved reference paired with the version it was resolved against.
///
/// Used as an external key when verses must be fetched per translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedReference {
    pub version: Version,
    pub reference: Reference,
}

impl Ord for VersionedReference {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.reference
            .cmp(&other.reference)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl PartialOrd for VersionedReference {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

fn join(set: &BTreeSet<u32>, separator: &str) -> String {
    set.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Compact rendering of an ordered set: `{1,2,3}` becomes `"1-3"`, a pair
/// becomes `"1, 3"`, a singleton becomes `"1"`, empty becomes `""`.
fn format_set(set: &BTreeSet<u32>) -> String {
    match (set.first(), set.last(), set.len()) {
        (Some(first), Some(last), n) if n > 2 => format!("{}-{}", first, last),
        (Some(first), Some(last), 2) => format!("{}, {}", first, last),
        (Some(only), _, 1) => only.to_string(),
        _ => String::new(),
    }
}
