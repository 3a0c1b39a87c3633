// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! The sequence comparator: a pluggable equality predicate on the elements
//! being diffed.
//!
//! The search never inspects an element beyond this predicate, so a
//! sequence can hold lines, bytes, code points, grapheme clusters, or
//! anything else `eq` can compare. Every public entry point in this crate
//! comes in two forms:
//!
//! - a plain form bounded on `T: PartialEq`, for the common case;
//! - a `_by` form taking `eq: impl Fn(&T, &T) -> bool + Copy`, for a
//!   caller that wants case-insensitive, whitespace-insensitive, or some
//!   other custom notion of "same element" — without touching the search
//!   itself.
//!
//! This mirrors the standard library's own `sort`/`sort_by`,
//! `dedup`/`dedup_by` split.

/// Equality predicate used by [`partial_eq`] to adapt `T: PartialEq` to the
/// `Fn(&T, &T) -> bool` shape every `_by` function expects.
#[inline]
pub fn partial_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}
