// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! The longest-common-subsequence extractor: the dual of the script
//! builder, recursing around middle snakes and emitting their contents.
//!
//! Base cases differ from the script builder's (§4.4) on purpose: when
//! `D <= 1` and one side is longer, the script builder emits a single
//! trailing insert or delete, but the LCS extractor emits nothing from
//! the non-snake remainder, since an empty prefix/suffix contributes no
//! common elements. Both behaviours are correct for their respective
//! component — see the design notes' Open Questions.

use crate::comparator::partial_eq;
use crate::error::DiffError;
use crate::middle_snake::find_middle_snake_by;

/// Returns the longest common subsequence of `a` and `b`, using the
/// equality predicate `eq`.
///
/// Property: applying only the deletes of [`crate::diff_by`]`(a, b, eq)`
/// to `a` yields this same sequence.
pub fn lcs_by<T: Clone>(a: &[T], b: &[T], eq: impl Fn(&T, &T) -> bool + Copy) -> Result<Vec<T>, DiffError> {
    let mut out = Vec::new();
    build(a, b, eq, &mut out)?;
    Ok(out)
}

/// Returns the longest common subsequence using plain element equality.
pub fn lcs<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Result<Vec<T>, DiffError> {
    lcs_by(a, b, partial_eq)
}

fn build<T: Clone>(
    a: &[T],
    b: &[T],
    eq: impl Fn(&T, &T) -> bool + Copy,
    out: &mut Vec<T>,
) -> Result<(), DiffError> {
    let n = a.len();
    let m = b.len();

    if n == 0 || m == 0 {
        // Per §4.6: the empty side contributes nothing, even if the
        // other side is nonempty (unlike the script builder's base case).
        return Ok(());
    }

    let snake = find_middle_snake_by(a, b, eq)?;

    if snake.d > 1 {
        build(&a[..snake.x], &b[..snake.y], eq, out)?;
        out.extend_from_slice(&a[snake.x..snake.u]);
        build(&a[snake.u..], &b[snake.v..], eq, out)?;
    } else if m > n {
        out.extend_from_slice(a);
    } else {
        out.extend_from_slice(b);
    }

    Ok(())
}
