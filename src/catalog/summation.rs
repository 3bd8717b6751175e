//! The opening contrast of every Big-O lecture: two functions computing the very same
//! quantity -- the sum of `1..=n` -- one in O(n), the other in O(1).
//!
//! [add_up_to] performs one addition per element, so its operation count grows
//! proportionally with `n`. [add_up_to_closed_form] always performs exactly three
//! arithmetic operations -- one multiplication, one addition, one division -- no matter
//! the value of `n`. Both produce `n*(n+1)/2`; their equivalence is pinned by tests.

/// Accumulates `1..=n` by repeated addition in a single forward scan -- O(n).\
/// For `n == 0` the loop simply does not execute and the total is 0 (accepted edge
/// case, not an error).
pub fn add_up_to(n: u32) -> u64 {
    let mut total = 0u64;
    for i in 1..=n as u64 {
        total += i;
    }
    total
}

/// Computes the same sum as [add_up_to] through the closed formula `n*(n+1)/2` -- O(1):
/// three arithmetic operations regardless of `n`.
pub fn add_up_to_closed_form(n: u32) -> u64 {
    let n = n as u64;
    n * (n + 1) / 2
}
