// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! The middle-snake finder: the bidirectional search at the heart of the
//! linear-space divide-and-conquer variant of Myers' algorithm. Given two
//! sequences, finds `D` and a "middle snake" — a diagonal run lying on the
//! shortest edit path closest to the centre of the edit grid — without
//! ever materialising the full `(N+1)x(M+1)` edit grid.
//!
//! Two V-arrays are kept: `Vf` searches forward from `(0, 0)`, `Vb`
//! searches backward from `(N, M)`. Parity of `Delta = N - M` decides
//! which direction can detect the frontiers meeting, so that `D` is
//! reported as `2*d - 1` or `2*d` correctly.

use crate::comparator::partial_eq;
use crate::error::DiffError;
use crate::varray::{restricted_bounds, VArray};

/// `D` and the start/end coordinates of a middle snake: `(x, y)` is where
/// the snake begins, `(u, v)` is where it ends. `u >= x`, `v >= y`, and
/// `u - x == v - y`. The snake may be empty (`x == u`, `y == v`) when `D`
/// is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleSnake {
    /// Minimum number of insert/delete edits between the two sequences.
    pub d: usize,
    /// Snake start, x-coordinate (index into the old sequence).
    pub x: usize,
    /// Snake start, y-coordinate (index into the new sequence).
    pub y: usize,
    /// Snake end, x-coordinate.
    pub u: usize,
    /// Snake end, y-coordinate.
    pub v: usize,
}

/// Finds `D` and a middle snake for `a` (old) versus `b` (new), using the
/// equality predicate `eq`.
pub fn find_middle_snake_by<T>(
    a: &[T],
    b: &[T],
    eq: impl Fn(&T, &T) -> bool + Copy,
) -> Result<MiddleSnake, DiffError> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let delta = n - m;

    let mut vf = VArray::new(a.len(), b.len());
    let mut vb = VArray::new(a.len(), b.len());

    let half_ceil = (n + m + 1) / 2;

    for d in 0..=half_ceil {
        // Forward pass: extend Vf over a/b directly.
        let (lo, hi) = restricted_bounds(d, n, m);
        let mut k = lo;
        while k <= hi {
            check_bound(k, -m, n)?;
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let x_i = x;
            let mut y = x as isize - k;
            let y_i = y;

            while (x as isize) < n && y < m && eq(&a[x], &b[y as usize]) {
                x += 1;
                y += 1;
            }
            vf[k] = x;

            log::trace!(target: "myers_diff::middle_snake", "forward d={d} k={k} x={x}");

            let inverse_k = -(k - delta);
            if delta % 2 != 0 && inverse_k >= -(d - 1) && inverse_k <= d - 1 {
                if x + vb[inverse_k] >= n as usize {
                    let snake = MiddleSnake {
                        d: (2 * d - 1) as usize,
                        x: x_i,
                        y: y_i as usize,
                        u: x,
                        v: y as usize,
                    };
                    log::debug!(target: "myers_diff::middle_snake", "{snake:?}");
                    return Ok(snake);
                }
            }
            k += 2;
        }

        // Reverse pass: extend Vb over the reversed sequences.
        let mut k = lo;
        while k <= hi {
            check_bound(k, -m, n)?;
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let x_i = x;
            let mut y = x as isize - k;
            let y_i = y;

            while (x as isize) < n
                && y < m
                && eq(
                    &a[(n - x as isize - 1) as usize],
                    &b[(m - y - 1) as usize],
                )
            {
                x += 1;
                y += 1;
            }
            vb[k] = x;

            log::trace!(target: "myers_diff::middle_snake", "reverse d={d} k={k} x={x}");

            let inverse_k = -(k - delta);
            if delta % 2 == 0 && inverse_k >= -d && inverse_k <= d {
                if x + vf[inverse_k] >= n as usize {
                    let snake = MiddleSnake {
                        d: (2 * d) as usize,
                        x: (n - x as isize) as usize,
                        y: (m - y) as usize,
                        u: (n - x_i as isize) as usize,
                        v: (m - y_i) as usize,
                    };
                    log::debug!(target: "myers_diff::middle_snake", "{snake:?}");
                    return Ok(snake);
                }
            }
            k += 2;
        }
    }

    unreachable!("forward and reverse frontiers always collide by D = ceil((N+M)/2)")
}

/// Finds `D` and a middle snake using plain element equality.
pub fn find_middle_snake<T: PartialEq>(a: &[T], b: &[T]) -> Result<MiddleSnake, DiffError> {
    find_middle_snake_by(a, b, partial_eq)
}

/// Defensive check: no diagonal `k` that indexes a point on the edit grid
/// can ever fall outside `[-m, n]` (`k = x - y`, and `0 <= x <= n`,
/// `0 <= y <= m`). If this ever fires it means the restricted-bounds
/// arithmetic itself is wrong, not that the input was bad.
fn check_bound(k: isize, lo: isize, hi: isize) -> Result<(), DiffError> {
    if k < lo || k > hi {
        return Err(DiffError::OutOfBounds {
            diagonal: k,
            bound: hi.max(-lo),
        });
    }
    Ok(())
}
