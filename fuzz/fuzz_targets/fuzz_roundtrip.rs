#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
use myers_diff::{apply, diff, diff_length, lcs, simplify};

fuzz_target!(|x: (Vec<u8>, Vec<u8>)| {
    let (a, b) = x;

    let script = match diff(&a, &b) {
        Ok(s) => s,
        Err(_) => return,
    };
    let rebuilt = apply(&a, &b, &script).expect("diff's own script must always apply");
    assert_eq!(rebuilt, b, "round-trip through the raw script failed");

    let simplified = simplify(&script);
    let rebuilt_simplified =
        apply(&a, &b, &simplified).expect("a simplified script must still apply");
    assert_eq!(
        rebuilt_simplified, b,
        "round-trip through the simplified script failed"
    );

    let d = diff_length(&a, &b);
    assert_eq!(
        d,
        script.len(),
        "diff_length must match the raw script's length"
    );

    let common = lcs(&a, &b).expect("lcs must succeed whenever diff does");
    assert_eq!(
        d,
        a.len() + b.len() - 2 * common.len(),
        "D must equal N + M - 2*|LCS|"
    );
});
