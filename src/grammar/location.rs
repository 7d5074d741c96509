use std::collections::BTreeSet;

use regex::{Captures, Regex};

use crate::errors::Result;
use crate::types::Location;

/// Pattern for one chapter/verse location clause, e.g. `1:2-4, 6` or `4, 5`.
///
/// Chapters are capped at three digits (practical chapter counts never exceed
/// 150); verses are unbounded. Group names are an implementation detail of
/// `extract` and never leak past this module.
pub(crate) const LOCATION_PATTERN: &str = concat!(
    r"(?P<chapter>1?[0-9]?[0-9])",
    r"(?:-(?P<chapter_end>\d+)|,\s*(?P<chapter_next>\d+))*",
    r"(?::\s*(?P<verse>\d+))?",
    r"(?:-(?P<verse_end>\d+)|,\s*(?P<verse_next>\d+))*",
);

/// Parses one location clause into a sequence of [`Location`] values.
///
/// Stateless and restartable: the same input always yields the same list.
#[derive(Debug)]
pub struct LocationGrammar {
    pattern: Regex,
}

impl LocationGrammar {
    /// Compiles the location pattern.
    ///
    /// Failure is only possible if the pattern constant itself is malformed
    /// and is fatal at startup, never degraded to "no matches".
    pub fn new() -> Result<LocationGrammar> {
        Ok(LocationGrammar {
            pattern: Regex::new(LOCATION_PATTERN)?,
        })
    }

    /// Extracts every location from the given clause, left to right.
    pub fn parse(&self, clause: &str) -> Vec<Location> {
        self.pattern
            .captures_iter(clause)
            .filter_map(|caps| extract(&caps))
            .collect()
    }
}

/// Typed extraction from a location match.
///
/// Range boundaries are validated here: `end > start` expands to the full
/// `[start, end]` interval, anything else keeps only `start`. Comma-listed
/// values are added unconditionally. A repeated range/sequence group retains
/// its last participating capture, so `1-3,5` sees `chapter_end = 3` and
/// `chapter_next = 5`.
fn extract(caps: &Captures<'_>) -> Option<Location> {
    let chapter = number(caps, "chapter")?;

    let mut chapters = BTreeSet::from([chapter]);
    if let Some(end) = number(caps, "chapter_end") {
        if end > chapter {
            chapters.extend(chapter..=end);
        }
    }
    if let Some(next) = number(caps, "chapter_next") {
        chapters.insert(next);
    }

    let mut verses = BTreeSet::new();
    if let Some(verse) = number(caps, "verse") {
        verses.insert(verse);
        if let Some(end) = number(caps, "verse_end") {
            if end > verse {
                verses.extend(verse..=end);
            }
        }
        if let Some(next) = number(caps, "verse_next") {
            verses.insert(next);
        }
    }

    Some(Location { chapters, verses })
}

fn number(caps: &Captures<'_>, group: &str) -> Option<u32> {
    caps.name(group).and_then(|m| m.as_str().parse().ok())
}
