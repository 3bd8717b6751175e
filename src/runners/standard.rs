//! Knows how to run the catalog's algorithms -- two passes at different input sizes --
//! and check the observed growth class against the expected maximum.\
//! The count-based front-ends are deterministic; the timed front-end retries on flaky
//! measurements.

use std::time::Duration;
use keen_retry::{loggable_retry_errors, ResolvedResult, RetryProducerResult, RetryResult};
use crate::{
    features::OUTPUT,
    complexity_analysis::{
        count_analysis::analyse_count_complexity,
        time_analysis::analyse_time_complexity,
        types::{
            AlgorithmPassesInfo,
            BigOAlgorithmAnalysis,
            BigOAlgorithmComplexity,
            BigOCountMeasurements,
            BigOTimeMeasurements,
            CountedAlgorithmMeasurements,
            TimedAlgorithmMeasurements,
        },
    },
    runners::common::*,
};


/// Runs `op_count_fn` -- which must return the exact number of elementary operations the
/// algorithm under analysis performs for a given input size -- once for each of the 2
/// input sizes, then checks that the observed growth class does not exceed
/// `expected_max_complexity`, panicking with a detailed report if it does.\
/// Deterministic: no clocks are involved, so there is nothing to retry.
pub fn test_counted_algorithm(test_name:               &str,
                              pass1_n:                 u32,
                              pass2_n:                 u32,
                              mut op_count_fn:         impl FnMut(u32) -> u64,
                              expected_max_complexity: BigOAlgorithmComplexity) {

    let passes_info = AlgorithmPassesInfo { pass1_n, pass2_n };
    let count_measurements = BigOCountMeasurements {
        pass_1_operations: op_count_fn(pass1_n),
        pass_2_operations: op_count_fn(pass2_n),
    };
    let observed_complexity = analyse_count_complexity(&passes_info, &count_measurements);
    let algorithm_analysis = BigOAlgorithmAnalysis {
        time_complexity: observed_complexity,
        algorithm_measurements: CountedAlgorithmMeasurements {
            measurement_name: test_name,
            passes_info,
            count_measurements,
        },
    };
    OUTPUT(&format!("{}\n", algorithm_analysis));

    if observed_complexity as u32 > expected_max_complexity as u32 {
        panic!("Complexity mismatch on the '{}' algorithm: maximum: {:?}, measured: {:?}", test_name, expected_max_complexity, observed_complexity);
    }
}

/// [test_counted_algorithm()] for the catalog's emitting functions: the operation count
/// is the number of lines the algorithm emits through its output sink.
pub fn test_emitting_algorithm(test_name:               &str,
                               pass1_n:                 u32,
                               pass2_n:                 u32,
                               mut algorithm:           impl FnMut(u32, &mut dyn FnMut(&str)),
                               expected_max_complexity: BigOAlgorithmComplexity) {
    test_counted_algorithm(test_name, pass1_n, pass2_n,
                           |n| count_emissions(|output| algorithm(n, output)),
                           expected_max_complexity)
}

/// Runs [analyse_algorithm()], trying to match the given maximum time complexity to the one
/// observed in runtime when running the algorithm -- retrying as much as `max_retry_attempts`
/// to avoid flaky test results.\
/// In case of rejection, a detailed run log with measurements & analysis results is issued.
pub fn test_algorithm(test_name:                    &str,
                      max_retry_attempts:           u32,
                      mut reset_fn:                 impl FnMut(),
                      pass1_n:                      u32,
                      mut pass1_algorithm:          impl FnMut() -> u32,
                      pass2_n:                      u32,
                      mut pass2_algorithm:          impl FnMut() -> u32,
                      expected_max_time_complexity: BigOAlgorithmComplexity) {
    let result = analyse_algorithm(test_name, &mut reset_fn, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, expected_max_time_complexity)
        .retry_with(|_| analyse_algorithm(test_name, &mut reset_fn, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, expected_max_time_complexity))
        .with_delays((0..max_retry_attempts).map(|_| Duration::from_secs(1)));
    let failure_msg = match result {
        ResolvedResult::Ok { .. } => None,
        ResolvedResult::Fatal { error, .. } => Some(error),
        ResolvedResult::Recovered { .. } => None,
        ResolvedResult::GivenUp { retry_errors, fatal_error, .. } => Some(format!("Given up with '{}' after {max_retry_attempts} attempts. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
        ResolvedResult::Unrecoverable { retry_errors, fatal_error, .. } => Some(format!("Stopped after retrying for {max_retry_attempts} attempts due to the fatal outcome '{}'. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
    };
    if let Some(failure_msg) = failure_msg {
        panic!("{}", failure_msg);
    }
}

/// Internal version of [test_algorithm()], allowing retries
fn analyse_algorithm(test_name:                    &str,
                     reset_fn:                     &mut impl FnMut(),
                     pass1_n:                      u32,
                     pass1_algorithm:              &mut impl FnMut() -> u32,
                     pass2_n:                      u32,
                     pass2_algorithm:              &mut impl FnMut() -> u32,
                     expected_max_time_complexity: BigOAlgorithmComplexity)
                    -> RetryProducerResult<String, String> {

    OUTPUT(&format!("Running '{}' algorithm:\n", test_name));
    let (_reset_pass_result, r0) = run_sync_pass_verbosely("  Resetting: ", "", || {reset_fn(); 0}, OUTPUT);
    let (pass1_result,       r1) = run_sync_pass_verbosely("; Pass 1: ", "", pass1_algorithm, OUTPUT);
    let (pass2_result,       r2) = run_sync_pass_verbosely("; Pass 2: ", "", pass2_algorithm, OUTPUT);
    let passes_info = AlgorithmPassesInfo { pass1_n, pass2_n };
    let time_measurements = BigOTimeMeasurements {
        pass_1_elapsed: pass1_result.elapsed,
        pass_2_elapsed: pass2_result.elapsed,
    };
    let observed_time_complexity = analyse_time_complexity(&passes_info, &time_measurements);
    let algorithm_analysis = BigOAlgorithmAnalysis {
        time_complexity: observed_time_complexity,
        algorithm_measurements: TimedAlgorithmMeasurements {
            measurement_name: test_name,
            passes_info,
            time_measurements,
        },
    };

    OUTPUT("\n\n");
    OUTPUT(&format!("{}\n", algorithm_analysis));

    if observed_time_complexity as u32 > expected_max_time_complexity as u32 {
        let msg = format!("\n ** TIME complexity mismatch on the '{}' algorithm: maximum: {:?}, measured: {:?} -- a reattempt may be performed...\n\n", test_name, expected_max_time_complexity, observed_time_complexity);
        OUTPUT(&msg);
        RetryResult::Transient { input: (), error: msg }
    } else {
        let msg = format!("r={}\n\n", r0 ^ r1 ^ r2);
        OUTPUT(&msg);
        RetryResult::Ok { reported_input: (), output: msg }
    }
}
