/// Reference resolution module.
///
/// Binds raw references (from the grammar) to concrete catalog books,
/// optionally across several loaded versions.
mod resolver;

pub use resolver::{resolve_in, ReferenceResolver, ResolutionOutcome};
