// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! A textual diff engine implementing Myers' O(ND) algorithm and its
//! linear-space divide-and-conquer variant.
//!
//! The engine is built bottom-up from eight components: a pluggable
//! sequence [`comparator`], a restricted-bounds circular [`varray`], a
//! standalone edit-distance [`length`] oracle, a bidirectional
//! [`middle_snake`] finder, a recursive [`script`] builder, a
//! change-pairing [`simplify`]r, an [`lcs`] extractor, an [`apply`]
//! (reconstruction), and a one-level-deeper [`intraline`] diff for
//! highlighting within a changed line pair.
//!
//! Six functions cover the crate's public surface:
//!
//! - [`diff`] — the minimal edit script turning one sequence into another.
//! - [`diff_length`] — just `D`, the edit distance, without building a script.
//! - [`lcs`] — the longest common subsequence.
//! - [`apply`] — reconstructs the new sequence from the old one and a script.
//! - [`simplify`] — collapses adjacent delete+insert runs into `change` ops.
//! - [`find_middle_snake`] — the bidirectional search the other operations
//!   are built on, exposed directly for callers that want to drive their
//!   own recursion (e.g. over something other than flat slices).
//!
//! Every entry point bounded on `T: PartialEq` also has a `_by` sibling
//! taking an explicit `eq: impl Fn(&T, &T) -> bool + Copy`, mirroring
//! `sort`/`sort_by` in the standard library.
//!
//! ```
//! use myers_diff::{diff, apply};
//!
//! let a = vec!['A', 'B', 'C'];
//! let b = vec!['A', 'X', 'C'];
//! let script = diff(&a, &b).unwrap();
//! assert_eq!(apply(&a, &b, &script).unwrap(), b);
//! ```

pub mod apply;
pub mod comparator;
pub mod error;
pub mod intraline;
pub mod lcs;
pub mod length;
pub mod middle_snake;
pub mod script;
pub mod simplify;
pub mod varray;

pub use apply::apply;
pub use error::DiffError;
pub use intraline::{highlight_bytes, highlight_text, LineHighlight, Run, RunKind};
pub use lcs::lcs;
pub use length::diff_length;
pub use middle_snake::{find_middle_snake, MiddleSnake};
pub use script::{diff, Op, Script};
pub use simplify::simplify;

pub use lcs::lcs_by;
pub use length::diff_length_by;
pub use middle_snake::find_middle_snake_by;
pub use script::diff_by;
