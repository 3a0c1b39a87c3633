// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! The script simplifier: collapses adjacent delete+insert runs at the
//! same position into `change` operations for better rendering.
//!
//! Grounded on `simplify_edit_script`/`get_parts_for_change_region` in the
//! original implementation this crate's algorithm was distilled from: a
//! single forward scan collects a maximal run of inserts/deletes sharing
//! a `position_old` anchor, pairs the first `min(d, i)` of each into
//! `change` ops (preserving relative order), and shifts any leftover
//! inserts' anchors right by that pairing count so their positions still
//! read correctly against the simplified script.

use crate::script::{Op, Script};

/// Pairs up adjacent insert/delete runs in `script` into `change`
/// operations. Idempotent: running this again on its own output is a
/// no-op.
pub fn simplify(script: &Script) -> Script {
    let mut out = Vec::with_capacity(script.len());
    let mut i = 0;
    let m = script.len();

    while i < m {
        let anchor = script[i].position_old();
        let mut deletes = Vec::new();
        let mut inserts = Vec::new();
        let mut last = anchor;

        // Follow the contiguous path of inserts and deletes anchored at
        // `last`. Stops either at the end of the script, at an
        // insert/delete that doesn't continue the run (left for the next
        // outer iteration to pick up as a fresh run), or at any other op
        // (a `Change`, e.g. from an already-simplified script), which is
        // consumed right here.
        let mut j = i;
        let mut other = None;
        while j < m {
            match script[j] {
                Op::Insert { position_old, .. } if position_old == last => {
                    inserts.push(j);
                    j += 1;
                }
                Op::Delete { position_old } if position_old == last => {
                    last = position_old + 1;
                    deletes.push(j);
                    j += 1;
                }
                Op::Insert { .. } | Op::Delete { .. } => break,
                Op::Change { .. } => {
                    other = Some(j);
                    j += 1;
                    break;
                }
            }
        }

        if !deletes.is_empty() && !inserts.is_empty() {
            out.extend(pair_run(script, i, &deletes, &inserts));
        } else {
            // A lone run of deletes or inserts passes through unchanged,
            // deletes first to match the order they were scanned in.
            out.extend(deletes.iter().map(|&k| script[k]));
            out.extend(inserts.iter().map(|&k| script[k]));
        }

        if let Some(k) = other {
            out.push(script[k]);
        }

        i = j;
    }

    out
}

/// Builds the simplified ops for one insert/delete run: the first
/// `min(deletes.len(), inserts.len())` of each become paired `Change`
/// ops, in the order they were scanned; any leftover inserts are shifted
/// right by that pairing count, leftover deletes pass through unchanged.
fn pair_run(script: &Script, run_start: usize, deletes: &[usize], inserts: &[usize]) -> Vec<Op> {
    let square = deletes.len().min(inserts.len());
    let mut parts = Vec::with_capacity(deletes.len() + inserts.len());

    for n in 0..square {
        let del = script[deletes[n]];
        let ins = script[inserts[n]];
        let (Op::Delete { position_old }, Op::Insert { position_new, .. }) = (del, ins) else {
            unreachable!("deletes/inserts only ever contain Delete/Insert ops")
        };
        parts.push(Op::Change {
            position_old,
            position_new,
        });
    }

    for &k in &inserts[square..] {
        let Op::Insert {
            position_old,
            position_new,
        } = script[k]
        else {
            unreachable!()
        };
        let shift_right = square - (position_old - script[run_start].position_old());
        parts.push(Op::Insert {
            position_old: position_old + shift_right,
            position_new,
        });
    }

    for &k in &deletes[square..] {
        parts.push(script[k]);
    }

    parts
}
