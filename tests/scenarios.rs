// This file is part of the myers-diff package.
//
// For the full copyright and license information, please view the LICENSE-*
// files that was distributed with this source code.

//! Concrete scenarios S1-S6, checked against their exact expected output.

use pretty_assertions::assert_eq;

use myers_diff::{apply, diff, diff_length, lcs, simplify, Op};

#[test]
fn s1_both_empty() {
    let a: Vec<i32> = vec![];
    let b: Vec<i32> = vec![];
    assert_eq!(diff(&a, &b).unwrap(), vec![]);
    assert_eq!(diff_length(&a, &b), 0);
    assert_eq!(lcs(&a, &b).unwrap(), Vec::<i32>::new());
}

#[test]
fn s2_pure_delete() {
    let a = vec![1];
    let b: Vec<i32> = vec![];
    assert_eq!(diff(&a, &b).unwrap(), vec![Op::Delete { position_old: 0 }]);
    assert_eq!(diff_length(&a, &b), 1);
    assert_eq!(lcs(&a, &b).unwrap(), Vec::<i32>::new());
}

#[test]
fn s3_pure_insert() {
    let a: Vec<i32> = vec![];
    let b = vec![1];
    assert_eq!(
        diff(&a, &b).unwrap(),
        vec![Op::Insert {
            position_old: 0,
            position_new: 0
        }]
    );
    assert_eq!(diff_length(&a, &b), 1);
    assert_eq!(lcs(&a, &b).unwrap(), Vec::<i32>::new());
}

#[test]
fn s4_identical() {
    let a = vec![1, 2, 3, 4];
    let b = vec![1, 2, 3, 4];
    assert_eq!(diff(&a, &b).unwrap(), vec![]);
    assert_eq!(diff_length(&a, &b), 0);
    assert_eq!(lcs(&a, &b).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn s5_no_common_elements_simplifies_to_four_changes() {
    let a = vec![1, 2, 3, 4];
    let b = vec![5, 6, 7, 8];

    let script = diff(&a, &b).unwrap();
    assert_eq!(diff_length(&a, &b), 8);
    let deletes = script.iter().filter(|o| matches!(o, Op::Delete { .. })).count();
    let inserts = script.iter().filter(|o| matches!(o, Op::Insert { .. })).count();
    assert_eq!(deletes, 4);
    assert_eq!(inserts, 4);

    let simplified = simplify(&script);
    assert_eq!(
        simplified,
        vec![
            Op::Change { position_old: 0, position_new: 0 },
            Op::Change { position_old: 1, position_new: 1 },
            Op::Change { position_old: 2, position_new: 2 },
            Op::Change { position_old: 3, position_new: 3 },
        ]
    );

    assert_eq!(lcs(&a, &b).unwrap(), Vec::<i32>::new());
}

#[test]
fn s6_robert_elder_example() {
    let a: Vec<char> = "ABCABBA".chars().collect();
    let b: Vec<char> = "CBABAC".chars().collect();

    assert_eq!(diff_length(&a, &b), 5);

    let common = lcs(&a, &b).unwrap();
    assert_eq!(common.len(), 4);
    assert_eq!(common, "CABA".chars().collect::<Vec<_>>());

    let script = diff(&a, &b).unwrap();
    assert_eq!(apply(&a, &b, &script).unwrap(), b);

    let simplified = simplify(&script);
    assert_eq!(apply(&a, &b, &simplified).unwrap(), b);
}
