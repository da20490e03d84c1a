use trisum::{ALL_STRATEGIES, sum_closed_form, sum_iterative, sum_recursive};

#[test]
fn test_strategies_agree_up_to_ten_thousand() {
    for n in 0..=10_000u64 {
        let closed = sum_closed_form(n);
        assert_eq!(closed, sum_iterative(n), "iterative diverges at n = {n}");
        assert_eq!(closed, sum_recursive(n), "recursive diverges at n = {n}");
    }
}

#[test]
fn test_known_fixed_points() {
    // Triangular numbers small enough to check by hand.
    let cases = [
        (0, 0),
        (1, 1),
        (2, 3),
        (3, 6),
        (4, 10),
        (5, 15),
        (10, 55),
        (100, 5050),
        (1000, 500500),
    ];
    for (n, expected) in cases {
        assert_eq!(sum_closed_form(n), expected);
        assert_eq!(sum_iterative(n), expected);
        assert_eq!(sum_recursive(n), expected);
    }
}

#[test]
fn test_idempotence() {
    for strategy in ALL_STRATEGIES {
        assert_eq!(
            strategy.apply(360),
            strategy.apply(360),
            "{strategy} is not pure"
        );
    }
}

#[test]
fn test_recursive_survives_deep_input() {
    // The frame stack lives on the heap; a depth of 100000 must not
    // threaten the machine stack, even under the smaller default stacks
    // of test threads.
    assert_eq!(sum_recursive(100_000), 5_000_050_000);
}

#[test]
fn test_closed_form_exactness_bound() {
    // Largest n whose intermediate product n * (n + 1) fits in a u64.
    let n = u64::from(u32::MAX);
    assert_eq!(sum_closed_form(n), (1 << 63) - (1 << 31));
}
