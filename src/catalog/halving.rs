//! Repeated halving -- the classic O(log(n)): each iteration cuts the remaining work in
//! half, so doubling `n` adds a single extra iteration.

/// Counts how many times `n` can be halved before the value reaches 1.\
/// The halving is real-valued (f64), matching the lecture formulation: the loop
/// stops once the value crosses 1, giving exactly `ceil(log2(n))` iterations for `n > 1`
/// and 0 for `n <= 1`. Integer floor division would, instead, under-count for
/// non-powers of two -- e.g. `number_of_halves(100_000)` is 17 here, but floored halving
/// would need 16 steps to hit 1.
pub fn number_of_halves(n: u32) -> u32 {
    let mut remaining = n as f64;
    let mut count = 0;
    while remaining > 1.0 {
        remaining /= 2.0;
        count += 1;
    }
    count
}
