/// Collapses duplicate items while preserving first-seen order.
///
/// Generic over any value-equatable reference type, raw or resolved. The
/// linear contains-scan keeps the pass order-preserving; no sorting, no
/// hashing requirement on `T`.
pub fn dedupe<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}
