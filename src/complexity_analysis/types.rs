//! Defines the enums & structs returned / shared by this crate's analysis functions.

use std::fmt::{Display, Formatter};
use std::time::Duration;
use crate::utils::presentation::{count_measurement, duration_measurement};

/// Possible time complexity analysis results, in big-O notation -- the ladder stops at
/// O(n²), the worst class any catalog entry exhibits.\
/// The "Between" variants absorb measurements falling outside the tolerance band of the
/// classes around them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BigOAlgorithmComplexity {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    WorseThanON2,
}
impl BigOAlgorithmComplexity {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1        => "Better than O(1)",
            Self::O1                  => "O(1)",
            Self::BetweenO1AndOLogN   => "Worse than O(1) but better than O(log(n))",
            Self::OLogN               => "O(log(n))",
            Self::BetweenOLogNAndON   => "Worse than O(log(n)) but better than O(n)",
            Self::ON                  => "O(n)",
            Self::BetweenONAndONLogN  => "Worse than O(n) but better than O(n.log(n))",
            Self::ONLogN              => "O(n.log(n))",
            Self::BetweenONLogNAndON2 => "Worse than O(n.log(n)) but better than O(n²)",
            Self::ON2                 => "O(n²)",
            Self::WorseThanON2        => "Worse than O(n²)",
        }
    }
}

/// Represents the pass information for the algorithm under analysis: the `n` each of
/// the 2 passes ran with -- the `n` in the Big-O notation... `O(n)`, `O(log(n))`, `O(n²)`, etc.
#[derive(Clone,Copy)]
pub struct AlgorithmPassesInfo {
    /// input size when running "pass 1"
    pub pass1_n: u32,
    /// input size when running "pass 2"
    pub pass2_n: u32,
}

/// represents an algorithm's wall-clock measurements for passes 1 & 2, so that it can
/// have its time complexity analyzed
#[derive(Clone,Copy)]
pub struct BigOTimeMeasurements {
    pub pass_1_elapsed: Duration,
    pub pass_2_elapsed: Duration,
}

/// represents an algorithm's exact elementary operation counts for passes 1 & 2 --
/// the deterministic alternative to [BigOTimeMeasurements] when the operations are
/// directly countable (emitted lines, executed additions, loop iterations, ...)
#[derive(Clone,Copy)]
pub struct BigOCountMeasurements {
    pub pass_1_operations: u64,
    pub pass_2_operations: u64,
}

/// Gathers the name, passes info & operation counts of a counted two-pass run,
/// for analysis & presentation
pub struct CountedAlgorithmMeasurements<'a> {
    /// a name for these measurements, for presentation purposes
    pub measurement_name:   &'a str,
    /// each pass info for use in the complexity analysis
    pub passes_info:        AlgorithmPassesInfo,
    pub count_measurements: BigOCountMeasurements,
}
impl Display for CountedAlgorithmMeasurements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} seem not to work on implementers of Display
        let pass_1_ops = format!("{}", count_measurement(self.count_measurements.pass_1_operations as f64));
        let pass_2_ops = format!("{}", count_measurement(self.count_measurements.pass_2_operations as f64));
        write!(f, "'{}' counted algorithm measurements:\n\
                   pass         Σops             n          ops/n\n\
                   1) {:>13}  {:>12}  {:>12.3}\n\
                   2) {:>13}  {:>12}  {:>12.3}\n",
               self.measurement_name,
               pass_1_ops, self.passes_info.pass1_n, self.count_measurements.pass_1_operations as f64 / self.passes_info.pass1_n as f64,
               pass_2_ops, self.passes_info.pass2_n, self.count_measurements.pass_2_operations as f64 / self.passes_info.pass2_n as f64)
    }
}

/// Gathers the name, passes info & elapsed times of a timed two-pass run,
/// for analysis & presentation
pub struct TimedAlgorithmMeasurements<'a> {
    /// a name for these measurements, for presentation purposes
    pub measurement_name:  &'a str,
    /// each pass info for use in the complexity analysis
    pub passes_info:       AlgorithmPassesInfo,
    pub time_measurements: BigOTimeMeasurements,
}
impl Display for TimedAlgorithmMeasurements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} seem not to work on implementers of Display
        let pass_1_time = format!("{}", duration_measurement(self.time_measurements.pass_1_elapsed));
        let pass_2_time = format!("{}", duration_measurement(self.time_measurements.pass_2_elapsed));
        write!(f, "'{}' timed algorithm measurements:\n\
                   pass           Δt             n\n\
                   1) {:>13}  {:>12}\n\
                   2) {:>13}  {:>12}\n",
               self.measurement_name,
               pass_1_time, self.passes_info.pass1_n,
               pass_2_time, self.passes_info.pass2_n)
    }
}

/// The final outcome of a two-pass analysis: the observed growth class together with the
/// measurements backing it -- `Display`s as the report shown to the user
pub struct BigOAlgorithmAnalysis<T: Display> {
    pub time_complexity:        BigOAlgorithmComplexity,
    pub algorithm_measurements: T,
}
impl<T: Display> Display for BigOAlgorithmAnalysis<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}--> observed time complexity: {}\n",
               self.algorithm_measurements,
               self.time_complexity.as_pretty_str())
    }
}
