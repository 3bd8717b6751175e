//! Contains functions to perform Algorithm Complexity Analysis from wall-clock measurements.
//!
//! Kept for the cases where there is nothing discrete to count -- the lecture's
//! headline demonstration times the iterative & closed-form summations back-to-back --
//! at the cost of measurement noise: see the retry machinery in `runners::standard`.

use super::{
    analyse_complexity,
    types::*,
};


/// Performs the time complexity analysis based on the elapsed times of 2 passes of the
/// algorithm, ran with the input sizes in `passes_info`.\
/// The input sizes must be chosen so each pass' elapsed time is high enough to make OS
/// & scheduling latencies negligible -- if the operation is CPU bounded, the machine
/// should be idle.
pub fn analyse_time_complexity(passes_info:  &AlgorithmPassesInfo,
                               measurements: &BigOTimeMeasurements) -> BigOAlgorithmComplexity {

    // time variation
    let t1 = measurements.pass_1_elapsed.as_secs_f64();
    let t2 = measurements.pass_2_elapsed.as_secs_f64();

    // input sizes
    let n1 = passes_info.pass1_n as f64;
    let n2 = passes_info.pass2_n as f64;

    analyse_complexity(t1, t2, n1, n2)
}
