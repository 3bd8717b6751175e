//! Sequential scans with observable emissions, showing that Big-O ignores constant
//! factors: two linear passes are still O(n), a constant number of passes over a
//! constant range is O(1), and only nesting a scan inside another brings us to O(n²).
//!
//! All functions here emit one line per elementary operation through the injected
//! `output` sink, so the emission count *is* the operation count being classified.

/// Emits a start marker, `0..n` ascending, a midpoint marker, `n-1..=0` descending and
/// an end marker: two sequential linear passes, `2n` numeric emissions plus 3 markers.\
/// That is O(2n + 3) -- which Big-O collapses to O(n), not O(n²): sequential loops add,
/// they don't multiply.
pub fn count_up_and_down(n: u32, mut output: impl FnMut(&str)) {
    output("Going Up!");
    for i in 0..n {
        output(&i.to_string());
    }
    output("At the top");
    for i in (0..n).rev() {
        output(&i.to_string());
    }
    output("Back down safely!");
}

/// For every `i` in `0..n` and every `j` in `0..n`, emits the pair `(i, j)` in row-major
/// order (outer `i`, inner `j`) -- the inner loop runs in full for each iteration of the
/// outer one, so `n * n` emissions: O(n²).
pub fn print_all_pairs(n: u32, mut output: impl FnMut(&str)) {
    for i in 0..n {
        for j in 0..n {
            output(&format!("({}, {})", i, j));
        }
    }
}

/// Emits the integers `1..=max(5, n)` ascending -- a linear scan bounded *below* by a
/// constant floor of 5 iterations when `n < 5`.\
/// The floor does not change the asymptote: O(max(5, n)) = O(n).
pub fn log_at_least_five(n: u32, mut output: impl FnMut(&str)) {
    for i in 1..=std::cmp::max(5, n) {
        output(&i.to_string());
    }
}

/// Emits the integers `1..=min(5, n)` ascending -- a linear scan bounded *above* by a
/// constant ceiling of 5 iterations.\
/// Here the bound does change the asymptote: O(min(5, n)) = O(1), even as `n → ∞`.
pub fn log_at_most_five(n: u32, mut output: impl FnMut(&str)) {
    for i in 1..=std::cmp::min(5, n) {
        output(&i.to_string());
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for the [scanning](super) catalog entries

    use super::*;

    /// captures every emission of `algorithm` into a vector
    fn collected_emissions(algorithm: impl FnOnce(&mut dyn FnMut(&str))) -> Vec<String> {
        let mut lines = Vec::new();
        algorithm(&mut |line| lines.push(line.to_string()));
        lines
    }

    /// ascending block, midpoint marker, descending block -- `2n` numbers + 3 markers
    #[test]
    fn count_up_and_down_emission_structure() {
        let n = 15;
        let lines = collected_emissions(|output| count_up_and_down(n, output));
        assert_eq!(lines.len(), 2 * n as usize + 3, "a count up & down over n={} must emit 2n+3 lines", n);
        assert_eq!(lines.first().map(String::as_str), Some("Going Up!"));
        assert_eq!(lines[n as usize + 1],             "At the top");
        assert_eq!(lines.last().map(String::as_str),  Some("Back down safely!"));
        for i in 0..n as usize {
            assert_eq!(lines[1 + i],                   i.to_string(),              "ascending block mismatch at position {}", i);
            assert_eq!(lines[n as usize + 2 + i],      (n as usize - 1 - i).to_string(), "descending block mismatch at position {}", i);
        }
    }

    /// n=0 degenerates to the 3 markers alone
    #[test]
    fn count_up_and_down_empty_range() {
        let lines = collected_emissions(|output| count_up_and_down(0, output));
        assert_eq!(lines, ["Going Up!", "At the top", "Back down safely!"]);
    }

    /// the literal row-major order for n=3
    #[test]
    fn print_all_pairs_row_major_order() {
        let lines = collected_emissions(|output| print_all_pairs(3, output));
        assert_eq!(lines, ["(0, 0)", "(0, 1)", "(0, 2)",
                           "(1, 0)", "(1, 1)", "(1, 2)",
                           "(2, 0)", "(2, 1)", "(2, 2)"]);
    }

    #[test]
    fn log_at_least_five_floor() {
        for (n, expected_len) in [(9, 9), (5, 5), (3, 5), (0, 5)] {
            let lines = collected_emissions(|output| log_at_least_five(n, output));
            assert_eq!(lines.len(), expected_len,       "log_at_least_five({}) must emit max(5, n) lines", n);
            assert_eq!(lines.first().map(String::as_str), Some("1"));
            assert_eq!(lines.last().map(String::as_str),  Some(&*expected_len.to_string()));
        }
    }

    #[test]
    fn log_at_most_five_ceiling() {
        for (n, expected_len) in [(9, 5), (5, 5), (3, 3), (1, 1), (0, 0)] {
            let lines = collected_emissions(|output| log_at_most_five(n, output));
            assert_eq!(lines.len(), expected_len, "log_at_most_five({}) must emit min(5, n) lines", n);
        }
    }
}
