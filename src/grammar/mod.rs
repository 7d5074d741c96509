/// Reference grammar module.
///
/// Scans free-form text for "book name + location clauses" occurrences and
/// turns the location clauses into chapter/verse index sets.
mod location;
mod reference;

pub use location::LocationGrammar;
pub use reference::ReferenceGrammar;
