//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the no public remote message
pub fn no_public_remote() -> impl Predicate<str> {
    predicates::str::contains("Cannot determine public remote for")
}

/// Creates a predicate that checks for the no public url message naming `link`
pub fn no_public_url(link: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Cannot determine public url for {link}"))
}

/// Creates a predicate that checks for malformed link messages
pub fn malformed_link() -> impl Predicate<str> {
    predicates::str::contains("Malformed link")
}

/// Creates a predicate that checks for a labeled output field
pub fn has_field(label: &str, value: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{label}:")).and(predicates::str::contains(value.to_string()))
}
