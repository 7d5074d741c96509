use tracing::debug;

use crate::catalog::BookCatalog;
use crate::types::{RawReference, Reference, Version, VersionedReference};

/// Binds a raw reference's book name against one catalog.
///
/// Returns `None` when the name is unknown to the catalog; this is a normal,
/// filterable outcome, not a failure. Locations are carried through
/// unchanged -- whether a chapter or verse actually exists in the book is the
/// verse store's question, never this one's.
pub fn resolve_in(raw: &RawReference, catalog: &BookCatalog) -> Option<Reference> {
    let book = catalog.find_by_name(&raw.book_name)?;
    Some(Reference {
        book: book.clone(),
        locations: raw.locations.clone(),
    })
}

/// Resolves raw references against the loaded version catalogs.
///
/// The catalog list is fixed at construction; its order is the deterministic
/// search order for unpinned resolution. A match always carries the matching
/// catalog's own `Book` entry -- a book from one version is never paired
/// with another version's identifier, even when both versions know the same
/// alias under different ids.
pub struct ReferenceResolver {
    catalogs: Vec<BookCatalog>,
}

/// Summary of a batch resolution pass.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    pub resolved: Vec<VersionedReference>,
    pub unresolved: Vec<RawReference>,
    pub total: usize,
    pub resolved_count: usize,
}

impl ReferenceResolver {
    pub fn new(catalogs: Vec<BookCatalog>) -> ReferenceResolver {
        ReferenceResolver { catalogs }
    }

    /// Resolves against a pinned version's catalog.
    ///
    /// `None` when the version is not loaded or its catalog does not know
    /// the book name. No cross-version fallback happens here.
    pub fn resolve(&self, raw: &RawReference, version: &Version) -> Option<Reference> {
        let catalog = self
            .catalogs
            .iter()
            .find(|catalog| catalog.version() == version)?;
        resolve_in(raw, catalog)
    }

    /// Resolves against the catalogs in load order; first match wins.
    pub fn resolve_any(&self, raw: &RawReference) -> Option<VersionedReference> {
        for catalog in &self.catalogs {
            if let Some(reference) = resolve_in(raw, catalog) {
                debug!(
                    book = %raw.book_name,
                    version = %catalog.version().identifier,
                    "resolved reference"
                );
                return Some(VersionedReference {
                    version: catalog.version().clone(),
                    reference,
                });
            }
        }
        debug!(book = %raw.book_name, "unresolved book name");
        None
    }

    /// Resolves a batch of raw references, returning a summary.
    ///
    /// Unresolvable names are collected, not reported as errors; callers
    /// that only want the matches can drop `unresolved` on the floor.
    pub fn resolve_all(&self, raws: &[RawReference]) -> ResolutionOutcome {
        let total = raws.len();
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();

        for raw in raws {
            match self.resolve_any(raw) {
                Some(reference) => resolved.push(reference),
                None => unresolved.push(raw.clone()),
            }
        }

        let resolved_count = resolved.len();

        ResolutionOutcome {
            resolved,
            unresolved,
            total,
            resolved_count,
        }
    }
}
