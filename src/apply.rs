// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! The edit-script applier: reconstructs the new sequence from the old one
//! and a script, by walking a cursor over the old sequence and copying
//! runs between operations.

use crate::error::DiffError;
use crate::script::{Op, Script};

/// Applies `script` to `a`, reconstructing the sequence it was built
/// against `b` from. `T: Clone` since the result is an owned sequence
/// built out of borrowed elements of both `a` and `b`.
///
/// Returns [`DiffError::InvalidScript`] if `script` is not one this crate
/// itself could have produced against `a`/`b`: a non-monotonic
/// `position_old`, or any position indexing past either sequence's end.
pub fn apply<T: Clone>(a: &[T], b: &[T], script: &Script) -> Result<Vec<T>, DiffError> {
    let mut out = Vec::with_capacity(a.len().max(b.len()));
    let mut cursor = 0usize;

    for &op in script {
        let position_old = op.position_old();
        if position_old < cursor || position_old > a.len() {
            return Err(DiffError::InvalidScript { op, cursor });
        }

        out.extend_from_slice(&a[cursor..position_old]);
        cursor = position_old;

        match op {
            Op::Delete { .. } => {
                if cursor >= a.len() {
                    return Err(DiffError::InvalidScript { op, cursor });
                }
                cursor += 1;
            }
            Op::Insert { position_new, .. } => {
                let Some(elem) = b.get(position_new) else {
                    return Err(DiffError::InvalidScript { op, cursor });
                };
                out.push(elem.clone());
            }
            Op::Change { position_new, .. } => {
                let Some(elem) = b.get(position_new) else {
                    return Err(DiffError::InvalidScript { op, cursor });
                };
                if cursor >= a.len() {
                    return Err(DiffError::InvalidScript { op, cursor });
                }
                out.push(elem.clone());
                cursor += 1;
            }
        }
    }

    out.extend_from_slice(&a[cursor..]);
    Ok(out)
}
