#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
use myers_diff::{diff, simplify};

fuzz_target!(|x: (Vec<u8>, Vec<u8>)| {
    let (a, b) = x;

    let script = match diff(&a, &b) {
        Ok(s) => s,
        Err(_) => return,
    };

    let once = simplify(&script);
    let twice = simplify(&once);
    assert_eq!(once, twice, "simplify is not idempotent");

    let mut last = 0usize;
    for op in &once {
        assert!(
            op.position_old() >= last,
            "simplified script is not ordered by position_old"
        );
        last = op.position_old();
    }
});
