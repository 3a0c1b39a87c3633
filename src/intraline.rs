// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! Intra-line diff: for a single `change` pair of lines, runs the script
//! builder and simplifier one level deeper, over the line's own units,
//! to produce equal/changed run boundaries a renderer can colour.
//!
//! Binary mode decomposes a line into bytes; text mode decomposes a `str`
//! into `char`s. Unlike formats that need an explicit surrogate-pair
//! joining pass before diffing, a Rust `char` is already a full Unicode
//! scalar value, so `str::chars()` needs no such step — there is simply
//! no separate joining pass to write here.

use std::ops::Range;

use crate::error::DiffError;
use crate::script::{diff, Op};
use crate::simplify::simplify;

/// Whether a run of units is shared between the old and new line, or was
/// touched by the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Equal,
    Changed,
}

/// One contiguous run of units, tagged [`Equal`](RunKind::Equal) or
/// [`Changed`](RunKind::Changed), given as a half-open byte/char-index
/// range into the line it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    pub range: Range<usize>,
}

/// The highlighted runs for one old/new line pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHighlight {
    pub old_runs: Vec<Run>,
    pub new_runs: Vec<Run>,
}

/// Highlights a changed line pair at the byte level.
pub fn highlight_bytes(old: &[u8], new: &[u8]) -> Result<LineHighlight, DiffError> {
    highlight_units(old, new)
}

/// Highlights a changed line pair at the `char` level. Indices in the
/// returned runs count `char`s, not bytes; a caller rendering against the
/// original `&str` should use `char_indices`/`chars().nth` accordingly.
pub fn highlight_text(old: &str, new: &str) -> Result<LineHighlight, DiffError> {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    highlight_units(&old_chars, &new_chars)
}

fn highlight_units<T: PartialEq>(old: &[T], new: &[T]) -> Result<LineHighlight, DiffError> {
    let script = simplify(&diff(old, new)?);

    let mut old_runs = Vec::new();
    let mut new_runs = Vec::new();
    let mut old_cursor = 0usize;
    let mut new_cursor = 0usize;

    let push_equal_old = |runs: &mut Vec<Run>, from: usize, to: usize| {
        if from < to {
            runs.push(Run {
                kind: RunKind::Equal,
                range: from..to,
            });
        }
    };

    for op in &script {
        match *op {
            Op::Delete { position_old } => {
                push_equal_old(&mut old_runs, old_cursor, position_old);
                old_runs.push(Run {
                    kind: RunKind::Changed,
                    range: position_old..position_old + 1,
                });
                old_cursor = position_old + 1;
            }
            Op::Insert {
                position_old,
                position_new,
            } => {
                push_equal_old(&mut old_runs, old_cursor, position_old);
                old_cursor = position_old;
                push_equal_new(&mut new_runs, new_cursor, position_new);
                new_runs.push(Run {
                    kind: RunKind::Changed,
                    range: position_new..position_new + 1,
                });
                new_cursor = position_new + 1;
            }
            Op::Change {
                position_old,
                position_new,
            } => {
                push_equal_old(&mut old_runs, old_cursor, position_old);
                old_runs.push(Run {
                    kind: RunKind::Changed,
                    range: position_old..position_old + 1,
                });
                old_cursor = position_old + 1;

                push_equal_new(&mut new_runs, new_cursor, position_new);
                new_runs.push(Run {
                    kind: RunKind::Changed,
                    range: position_new..position_new + 1,
                });
                new_cursor = position_new + 1;
            }
        }
    }

    push_equal_old(&mut old_runs, old_cursor, old.len());
    push_equal_new(&mut new_runs, new_cursor, new.len());

    Ok(LineHighlight { old_runs, new_runs })
}

fn push_equal_new(runs: &mut Vec<Run>, from: usize, to: usize) {
    if from < to {
        runs.push(Run {
            kind: RunKind::Equal,
            range: from..to,
        });
    }
}
