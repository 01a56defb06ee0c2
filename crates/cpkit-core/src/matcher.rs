//! Set-membership checks used when matching labels against rule sets.
//!
//! Statically typed: the caller picks `contains` for a single needle or
//! `contains_any`/`contains_all` for a list, resolved at compile time.

/// True if `needle` equals one member of `set`.
pub fn contains<T: PartialEq>(set: &[T], needle: &T) -> bool {
    set.iter().any(|m| m == needle)
}

/// True if at least one of `needles` is a member of `set`.
/// An empty `needles` matches nothing.
pub fn contains_any<T: PartialEq>(set: &[T], needles: &[T]) -> bool {
    needles.iter().any(|n| contains(set, n))
}

/// True if every one of `needles` is a member of `set`.
/// An empty `needles` is vacuously true.
pub fn contains_all<T: PartialEq>(set: &[T], needles: &[T]) -> bool {
    needles.iter().all(|n| contains(set, n))
}
