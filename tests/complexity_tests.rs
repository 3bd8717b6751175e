//! Attests the *growth class* of every catalog function -- deterministically, from exact
//! operation counts: emitted lines for the emitting functions, returned iteration counts
//! for the halving, and executed additions (captured through an instrumented element
//! type) for the subtotals variants.

use big_o_primer::*;
use big_o_primer::complexity_analysis::{
    count_analysis::analyse_count_complexity,
    types::{AlgorithmPassesInfo, BigOCountMeasurements},
};
use std::{
    ops::Add,
    sync::atomic::{AtomicU64, Ordering::Relaxed},
};
use ctor::ctor;


/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially -- this may be replaced by using the `serial_test` crate
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// classifies the emission growth of `algorithm` ran at the two given input sizes
fn classified_emission_growth(pass1_n: u32, pass2_n: u32, mut algorithm: impl FnMut(u32, &mut dyn FnMut(&str))) -> BigOAlgorithmComplexity {
    let measurements = BigOCountMeasurements {
        pass_1_operations: count_emissions(|output| algorithm(pass1_n, output)),
        pass_2_operations: count_emissions(|output| algorithm(pass2_n, output)),
    };
    analyse_count_complexity(&AlgorithmPassesInfo { pass1_n, pass2_n }, &measurements)
}


/// two sequential linear passes are still O(n) -- not O(n²)
#[test]
fn count_up_and_down_is_linear() {
    assert_eq!(classified_emission_growth(1000, 2000, |n, output| count_up_and_down(n, output)),
               BigOAlgorithmComplexity::ON);
}

/// a linear pass nested inside another is O(n²)
#[test]
fn print_all_pairs_is_quadratic() {
    assert_eq!(classified_emission_growth(64, 128, |n, output| print_all_pairs(n, output)),
               BigOAlgorithmComplexity::ON2);
}

/// the constant floor doesn't change the asymptote above it... but rules below it
#[test]
fn log_at_least_five_is_linear_above_the_floor() {
    assert_eq!(classified_emission_growth(10_000, 20_000, |n, output| log_at_least_five(n, output)),
               BigOAlgorithmComplexity::ON);
    // below the floor, the 5 emissions make it constant
    assert_eq!(classified_emission_growth(2, 4, |n, output| log_at_least_five(n, output)),
               BigOAlgorithmComplexity::O1);
}

/// the constant ceiling makes it O(1), no matter how large `n` grows
#[test]
fn log_at_most_five_is_constant() {
    assert_eq!(classified_emission_growth(10_000, 20_000, |n, output| log_at_most_five(n, output)),
               BigOAlgorithmComplexity::O1);
}

/// each iteration halves the remaining work: the iteration count -- which the function
/// itself returns -- grows with log2(n)
#[test]
fn number_of_halves_is_logarithmic() {
    let measurements = BigOCountMeasurements {
        pass_1_operations: number_of_halves(1_024) as u64,
        pass_2_operations: number_of_halves(1_048_576) as u64,
    };
    assert_eq!(analyse_count_complexity(&AlgorithmPassesInfo { pass1_n: 1_024, pass2_n: 1_048_576 }, &measurements),
               BigOAlgorithmComplexity::OLogN);
}

/// the single-pass filter visits each element once
#[test]
fn even_index_elements_is_linear() {
    let filtered_len = |n: u32| even_index_elements(&vec![0u8; n as usize]).len() as u64;
    // the output length is ceil(n/2) -- one retained element per 2 visited ones
    let measurements = BigOCountMeasurements {
        pass_1_operations: filtered_len(10_000),
        pass_2_operations: filtered_len(20_000),
    };
    assert_eq!(analyse_count_complexity(&AlgorithmPassesInfo { pass1_n: 10_000, pass2_n: 20_000 }, &measurements),
               BigOAlgorithmComplexity::ON);
}

/// counts every `+` executed by the subtotals variants, through an instrumented element type
static EXECUTED_ADDITIONS: AtomicU64 = AtomicU64::new(0);

/// an i64 whose additions are globally counted -- the instrument behind
/// [subtotals_additions_count()]
#[derive(Clone, Copy, Default, PartialEq, Debug)]
struct CountedI64(i64);
impl Add for CountedI64 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        EXECUTED_ADDITIONS.fetch_add(1, Relaxed);
        Self(self.0 + rhs.0)
    }
}

/// runs a subtotals variant on an `n`-element input, returning the number of `+` it executed
fn subtotals_additions_count(n: u32, subtotals_fn: impl Fn(&[CountedI64]) -> Vec<CountedI64>) -> u64 {
    let input = vec![CountedI64(1); n as usize];
    let before = EXECUTED_ADDITIONS.load(Relaxed);
    let subtotal_array = subtotals_fn(&input);
    assert_eq!(subtotal_array.len(), input.len(), "a subtotals variant returned the wrong number of elements");
    EXECUTED_ADDITIONS.load(Relaxed) - before
}

/// re-summing every prefix from scratch costs n*(n+1)/2 additions -- O(n²) -- even though
/// the output is identical to the linear variant's: the pedagogical point of the catalog
#[test]
fn subtotals_naive_is_quadratic() {
    let (pass1_n, pass2_n) = (4_096, 8_192);
    let measurements = BigOCountMeasurements {
        pass_1_operations: subtotals_additions_count(pass1_n, subtotals_naive),
        pass_2_operations: subtotals_additions_count(pass2_n, subtotals_naive),
    };
    assert_eq!(measurements.pass_1_operations, pass1_n as u64 * (pass1_n as u64 + 1) / 2, "naive subtotals executed an unexpected number of additions");
    assert_eq!(analyse_count_complexity(&AlgorithmPassesInfo { pass1_n, pass2_n }, &measurements),
               BigOAlgorithmComplexity::ON2);
}

/// the running accumulator performs one addition per element -- O(n) -- with the very same output
#[test]
fn subtotals_linear_is_linear() {
    let (pass1_n, pass2_n) = (4_096, 8_192);
    let measurements = BigOCountMeasurements {
        pass_1_operations: subtotals_additions_count(pass1_n, subtotals_linear),
        pass_2_operations: subtotals_additions_count(pass2_n, subtotals_linear),
    };
    assert_eq!(measurements.pass_1_operations, pass1_n as u64, "linear subtotals executed an unexpected number of additions");
    assert_eq!(analyse_count_complexity(&AlgorithmPassesInfo { pass1_n, pass2_n }, &measurements),
               BigOAlgorithmComplexity::ON);
}

/// the runner front-ends enforce the same classifications, panicking on a mismatch
#[test]
fn runner_front_ends() {
    test_emitting_algorithm("print_all_pairs()", 64, 128,
                            |n, output| print_all_pairs(n, output),
                            BigOAlgorithmComplexity::ON2);
    test_emitting_algorithm("count_up_and_down()", 1000, 2000,
                            |n, output| count_up_and_down(n, output),
                            BigOAlgorithmComplexity::ON);
    test_counted_algorithm("number_of_halves()", 1_024, 1_048_576,
                           |n| number_of_halves(n) as u64,
                           BigOAlgorithmComplexity::OLogN);
}

/// a mismatching expectation must be rejected with a report
#[test]
#[should_panic(expected = "Complexity mismatch")]
fn runner_rejects_understated_complexity() {
    test_emitting_algorithm("print_all_pairs() understated as O(n)", 64, 128,
                            |n, output| print_all_pairs(n, output),
                            BigOAlgorithmComplexity::ON);
}
