//! Contains functions to perform Algorithm Complexity Analysis from *exact operation counts*.
//!
//! The catalog functions have directly countable elementary operations (emitted lines,
//! executed additions, loop iterations), so their growth class can be determined
//! deterministically -- no wall clocks, no flakiness, no retries. This is the primary
//! verification path for this crate; see [time_analysis](super::time_analysis) for the
//! wall-clock alternative.

use super::{
    analyse_complexity,
    types::*,
};


/// Performs the complexity analysis based on the exact operation counts gathered from
/// 2 passes of the algorithm, ran with the input sizes in `passes_info`.\
/// The input sizes should be far enough apart (2x or more) for the growth classes'
/// theoretical ratios not to fall within each other's tolerance bands.
pub fn analyse_count_complexity(passes_info:  &AlgorithmPassesInfo,
                                measurements: &BigOCountMeasurements) -> BigOAlgorithmComplexity {

    // operation count variation
    let c1 = measurements.pass_1_operations as f64;
    let c2 = measurements.pass_2_operations as f64;

    // input sizes
    let n1 = passes_info.pass1_n as f64;
    let n2 = passes_info.pass2_n as f64;

    analyse_complexity(c1, c2, n1, n2)
}
