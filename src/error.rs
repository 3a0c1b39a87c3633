// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! Error types for the diff engine.
//!
//! The algorithm is total over all pairs of finite sequences, so the only
//! errors this crate can produce come from misuse of its outputs (feeding
//! [`crate::apply`] a script it didn't build) or from an internal bounds
//! violation that would indicate a bug in the search itself.

use std::fmt;

use crate::script::Op;

/// Something went wrong while using the diff engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffError {
    /// [`crate::apply`] was given a script whose `position_old` is smaller
    /// than the cursor already reached, or that points outside the old or
    /// new sequence. Both are "ill-formed" per the same check: a script
    /// that didn't come from [`crate::diff`]/[`crate::simplify`].
    InvalidScript {
        /// The offending operation.
        op: Op,
        /// The cursor position into the old sequence at the time `op` was
        /// encountered.
        cursor: usize,
    },
    /// The middle-snake search computed a diagonal outside the range the
    /// restricted bounds guarantee. This is never expected to happen; it
    /// indicates a bug in this crate, not a problem with the input.
    OutOfBounds {
        /// The diagonal that was about to be accessed.
        diagonal: isize,
        /// The `[-bound, bound]` range that should have contained it.
        bound: isize,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::InvalidScript { op, cursor } => write!(
                f,
                "invalid edit script: {op:?} is out of order or out of range at cursor {cursor}"
            ),
            DiffError::OutOfBounds { diagonal, bound } => write!(
                f,
                "middle-snake search diagonal {diagonal} outside restricted bound [-{bound}, {bound}]"
            ),
        }
    }
}

impl std::error::Error for DiffError {}
