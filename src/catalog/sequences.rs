//! Derived sequences: building a new sequence out of an input slice.
//!
//! [even_index_elements] is the O(n) single-pass filter. [subtotals_naive] re-sums every
//! prefix from scratch -- O(n²) -- while [subtotals_linear] carries a running accumulator
//! -- O(n) -- and both produce identical output. The naive variant is kept *on purpose*:
//! the whole point of the contrast is that an algorithm's output says nothing about its
//! cost, so don't "fix" it.

use std::ops::Add;

/// Produces a new sequence containing only the elements of `array` at even positions
/// (0-indexed), preserving relative order -- a single linear pass, O(n).\
/// The output is sized exactly to the filtered count, `ceil(len/2)`, and grown by
/// appending -- no pre-sized slots that could be left undefined.
pub fn even_index_elements<T: Clone>(array: &[T]) -> Vec<T> {
    let mut filtered = Vec::with_capacity((array.len() + 1) / 2);
    for (i, element) in array.iter().enumerate() {
        if i % 2 == 0 {
            filtered.push(element.clone());
        }
    }
    filtered
}

/// Produces the running prefix sums of `array` -- `output[i] = array[0] + ... + array[i]`
/// -- by re-summing each prefix from scratch with a nested scan: `1 + 2 + ... + n`
/// additions, O(n²).\
/// Deliberately inefficient: contrast with [subtotals_linear], which computes the very
/// same output in O(n).
pub fn subtotals_naive<T>(array: &[T]) -> Vec<T>
where T: Copy + Default + Add<Output=T> {
    let mut subtotal_array = Vec::with_capacity(array.len());
    for i in 0..array.len() {
        let mut subtotal = T::default();
        for j in 0..=i {
            subtotal = subtotal + array[j];
        }
        subtotal_array.push(subtotal);
    }
    subtotal_array
}

/// The optimized counterpart of [subtotals_naive]: a single pass carrying a running
/// accumulator -- one addition per element, O(n) -- producing identical output.
pub fn subtotals_linear<T>(array: &[T]) -> Vec<T>
where T: Copy + Default + Add<Output=T> {
    let mut subtotal_array = Vec::with_capacity(array.len());
    let mut running_total = T::default();
    for &element in array {
        running_total = running_total + element;
        subtotal_array.push(running_total);
    }
    subtotal_array
}
