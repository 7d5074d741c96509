use std::collections::BTreeSet;

use verseref::catalog::BookCatalog;
use verseref::resolution::{resolve_in, ReferenceResolver};
use verseref::types::{Book, Location, RawReference, Version};

fn book(id: u32, index: u32, title: &str, alt: &str, abbr: &str) -> Book {
    Book {
        id,
        index,
        title: title.to_string(),
        alt: alt.to_string(),
        abbr: abbr.to_string(),
        chapters_count: 0,
    }
}

fn kjv_catalog() -> BookCatalog {
    BookCatalog::new(
        Version::new("KJV:en_US"),
        vec![
            book(1, 1, "Genesis", "Gen", "Ge"),
            book(2, 2, "Exodus", "Exod", "Ex"),
        ],
    )
}

/// Russian synodal catalog. Genesis deliberately carries a different id than
/// in the KJV catalog to exercise the no-substitution policy.
fn rst_catalog() -> BookCatalog {
    BookCatalog::new(
        Version::new("RST:ru_RU"),
        vec![
            book(10, 1, "Бытие", "Быт", "Быт"),
            book(20, 2, "Исход", "Исх", "Исх"),
        ],
    )
}

fn raw(book_name: &str) -> RawReference {
    RawReference {
        book_name: book_name.to_string(),
        locations: BTreeSet::from([Location {
            chapters: BTreeSet::from([1]),
            verses: BTreeSet::from([1, 2]),
        }]),
    }
}

#[test]
fn test_resolve_in_catalog() {
    let catalog = kjv_catalog();
    let reference = resolve_in(&raw("ge"), &catalog).expect("should resolve Genesis");
    assert_eq!(reference.book.id, 1);
    assert_eq!(reference.book.title, "Genesis");
}

#[test]
fn test_resolve_carries_locations_unchanged() {
    let catalog = kjv_catalog();
    let input = raw("Gen");
    let reference = resolve_in(&input, &catalog).expect("should resolve");
    assert_eq!(reference.locations, input.locations);
}

#[test]
fn test_resolve_unknown_book_is_none() {
    assert!(resolve_in(&raw("Foobar"), &kjv_catalog()).is_none());
}

#[test]
fn test_resolve_pinned_version() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog(), rst_catalog()]);

    let reference = resolver
        .resolve(&raw("Быт"), &Version::new("RST:ru_RU"))
        .expect("should resolve in pinned version");
    assert_eq!(reference.book.id, 10);
}

#[test]
fn test_resolve_pinned_version_not_loaded() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog()]);
    assert!(resolver.resolve(&raw("Gen"), &Version::new("asv")).is_none());
}

#[test]
fn test_resolve_pinned_version_has_no_cross_version_fallback() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog(), rst_catalog()]);
    // "Быт" exists in the RST catalog only; pinning KJV must fail rather
    // than substitute the RST book.
    assert!(resolver
        .resolve(&raw("Быт"), &Version::new("KJV:en_US"))
        .is_none());
}

#[test]
fn test_resolve_any_prefers_load_order() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog(), rst_catalog()]);

    let versioned = resolver.resolve_any(&raw("Gen")).expect("should resolve");
    assert_eq!(versioned.version.identifier, "kjv");
    assert_eq!(versioned.reference.book.id, 1);
}

#[test]
fn test_resolve_any_falls_through_to_later_version() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog(), rst_catalog()]);

    let versioned = resolver.resolve_any(&raw("Исх")).expect("should resolve");
    assert_eq!(versioned.version.identifier, "rst");
    // The book is the matching catalog's own entry, with its own id.
    assert_eq!(versioned.reference.book.id, 20);
    assert_eq!(versioned.reference.book.title, "Исход");
}

#[test]
fn test_resolve_any_unknown_everywhere() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog(), rst_catalog()]);
    assert!(resolver.resolve_any(&raw("Foobar")).is_none());
}

#[test]
fn test_resolve_all_summary() {
    let resolver = ReferenceResolver::new(vec![kjv_catalog(), rst_catalog()]);
    let raws = vec![raw("Gen"), raw("Foobar"), raw("Быт")];

    let outcome = resolver.resolve_all(&raws);
    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.resolved_count, 2);
    assert_eq!(outcome.resolved.len(), 2);
    assert_eq!(outcome.unresolved, vec![raw("Foobar")]);
    assert_eq!(outcome.resolved[0].reference.book.id, 1);
    assert_eq!(outcome.resolved[1].reference.book.id, 10);
}
