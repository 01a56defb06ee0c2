//! Key-space helpers for the coordination store.
//!
//! Store keys are slash-joined paths under a per-deployment prefix; object
//! ids are short FNV fingerprints of a seed string so keys stay readable.

use crate::hash::{self, HashAlgorithm};

/// Join key segments into a store path: `["clusters", "eu", "0"]` →
/// `"clusters/eu/0"`. Segments are used verbatim.
pub fn key_path(segments: &[&str]) -> String {
    segments.join("/")
}

/// Short identifier for a store object, derived from a seed string such as
/// an endpoint address. Not for adversarial input.
pub fn object_id(seed: &str) -> String {
    hash::digest(seed, HashAlgorithm::Fnv64a)
}
