#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
use myers_diff::{apply, Op};

// Ops are reconstructed from raw tuples here rather than deriving
// `Arbitrary` on `Op` itself, since these are adversarial scripts the
// harness did not get from `diff` — exactly the malformed input
// `apply` must reject instead of panicking on.
fuzz_target!(|x: (Vec<i32>, Vec<i32>, Vec<(u8, usize, usize)>)| {
    let (a, b, raw_ops) = x;

    let script: Vec<Op> = raw_ops
        .into_iter()
        .map(|(tag, position_old, position_new)| match tag % 3 {
            0 => Op::Delete { position_old },
            1 => Op::Insert {
                position_old,
                position_new,
            },
            _ => Op::Change {
                position_old,
                position_new,
            },
        })
        .collect();

    // Must never panic: either it applies cleanly, or it reports
    // `InvalidScript`.
    let _ = apply(&a, &b, &script);
});
