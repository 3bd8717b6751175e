//! Contains code shared between this module's submodules

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// contains the measurements for a pass done in [run_sync_pass()]
#[derive(Clone,Copy)]
pub struct PassResult {
    pub elapsed: Duration,
}

/// Runs a pass on the given synchronous `algorithm` callback function or closure,
/// measuring (and returning) the time it took to run it.
/// ```
///     /// Algorithm function under analysis.
///     /// Returns a(ny) computed number to avoid compiler call cancellation optimizations
///     fn algorithm() -> u32 {0}
/// ```
/// returns: tuple with ([PassResult], computed_number: u32)
pub(crate) fn run_sync_pass(mut algorithm: impl FnMut() -> u32)
                           -> (PassResult, u32) {

    let start = Instant::now();
    let r = black_box(algorithm());
    let duration = start.elapsed();

    (PassResult {
        elapsed: duration,
    }, r)
}

/// wrap around the original [run_sync_pass()] to output progress & intermediate results
pub fn run_sync_pass_verbosely<_OutputClosure: FnMut(&str)>
                              (result_prefix: &str,
                               result_suffix: &str,
                               algorithm:     impl FnMut() -> u32,
                               mut output:    _OutputClosure)
                              -> (PassResult, u32) {
    let (pass_result, r) = run_sync_pass(algorithm);
    output(&format!("{}{:?}{}", result_prefix, pass_result.elapsed, result_suffix));
    (pass_result, r)
}

/// Runs the given emitting algorithm against a sink that simply counts, returning the
/// number of lines it emitted -- for the catalog's emitting functions, the emission
/// count is the elementary operation count being classified.
pub fn count_emissions(algorithm: impl FnOnce(&mut dyn FnMut(&str))) -> u64 {
    let mut emissions = 0;
    algorithm(&mut |_line| emissions += 1);
    emissions
}
