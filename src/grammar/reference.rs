use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::errors::Result;
use crate::grammar::location::LOCATION_PATTERN;
use crate::grammar::LocationGrammar;
use crate::types::{Location, RawReference};

/// Separator between a book name and its locations, and between a numeric
/// prefix and the book word. Deliberately narrower than `\s`: a newline must
/// break a book name from a location clause on the next line.
const SEPARATOR: &str = r"[\t\x0C\p{Z}]";

/// Scans arbitrary free text for "book name + one-or-more location clauses"
/// occurrences, e.g. `Gen 1:1-2`, `3 King 1:2-4, 6` or `II Ki. 3:12`.
///
/// Single pass, left-to-right; the output order is the order occurrences
/// appear in the source text.
#[derive(Debug)]
pub struct ReferenceGrammar {
    pattern: Regex,
    locations: LocationGrammar,
}

impl ReferenceGrammar {
    /// Compiles the reference pattern; fatal on malformed grammar constants.
    pub fn new() -> Result<ReferenceGrammar> {
        // The separator between repeated location clauses is the narrow one
        // as well: with a bare `\s?` a greedy locations group would swallow
        // a digit-prefixed book name on the next line ("1 Cor 1:1\n2 Cor"
        // would absorb the "2" as a chapter).
        let pattern = format!(
            r"(?P<book>(?:(?:[1234]|I{{1,4}}){sep}*)?\w+\.?){sep}+(?P<locations>(?:(?:{location}){sep}?)+)",
            sep = SEPARATOR,
            location = LOCATION_PATTERN,
        );
        Ok(ReferenceGrammar {
            pattern: RegexBuilder::new(&pattern).case_insensitive(true).build()?,
            locations: LocationGrammar::new()?,
        })
    }

    /// Extracts every raw reference from the text, in order of appearance.
    ///
    /// Text with no recognizable reference yields an empty list, never an
    /// error. Book names are matched with Unicode word characters, so
    /// non-Latin names (`Притч 28:27`) are picked up as written. A purely
    /// numeric token (`10:22` on a notes line) is never taken for a book.
    pub fn parse(&self, text: &str) -> Vec<RawReference> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let book_name = caps.name("book")?.as_str();
                if !book_name.chars().any(char::is_alphabetic) {
                    return None;
                }

                let clause = caps.name("locations")?.as_str();
                let locations: BTreeSet<Location> =
                    self.locations.parse(clause).into_iter().collect();
                if locations.is_empty() {
                    return None;
                }

                trace!(book = book_name, clause, "matched reference");
                Some(RawReference {
                    book_name: book_name.to_string(),
                    locations,
                })
            })
            .collect()
    }
}
