//! A guided tour through the catalog, reproducing a classic Big-O lecture
//! top-to-bottom with its literal arguments -- including the back-to-back timing that
//! motivates the whole subject: the same sum, computed in O(n) and in O(1).
//!
//! Run it with `cargo run --release --bin tour`.

use std::hint::black_box;
use std::time::Instant;
use big_o_primer::{
    OUTPUT,
    add_up_to, add_up_to_closed_form,
    count_up_and_down, print_all_pairs,
    number_of_halves,
    log_at_least_five, log_at_most_five,
    even_index_elements, subtotals_naive,
};
use big_o_primer::utils::presentation::duration_measurement;

fn main() {

    // O(n) vs O(1): the same sum, two costs
    //////////////////////////////////////

    OUTPUT(&format!("add_up_to(6): {}\n",   add_up_to(6)));
    OUTPUT(&format!("add_up_to(100): {}\n", add_up_to(100)));

    let start = Instant::now();
    let total = black_box(add_up_to(1_000_000));
    let elapsed = start.elapsed();
    OUTPUT(&format!("add_up_to(1_000_000): {} -- time elapsed: {}\n", total, duration_measurement(elapsed)));

    OUTPUT(&format!("add_up_to_closed_form(6): {}\n",   add_up_to_closed_form(6)));
    OUTPUT(&format!("add_up_to_closed_form(100): {}\n", add_up_to_closed_form(100)));

    let start = Instant::now();
    let total = black_box(add_up_to_closed_form(1_000_000));
    let elapsed = start.elapsed();
    OUTPUT(&format!("add_up_to_closed_form(1_000_000): {} -- time elapsed: {}\n", total, duration_measurement(elapsed)));

    // sequential scans add, nested scans multiply
    //////////////////////////////////////////////

    OUTPUT("\ncount_up_and_down(15):\n");
    count_up_and_down(15, emit);

    OUTPUT("\nprint_all_pairs(3):\n");
    print_all_pairs(3, emit);

    // O(log(n)): repeated halving
    //////////////////////////////

    OUTPUT(&format!("\nnumber_of_halves(100_000): {}\n", number_of_halves(100_000)));

    // constant floors & ceilings
    /////////////////////////////

    OUTPUT("\nlog_at_least_five(9):\n");
    log_at_least_five(9, emit);
    OUTPUT("log_at_least_five(3):\n");
    log_at_least_five(3, emit);

    OUTPUT("\nlog_at_most_five(9):\n");
    log_at_most_five(9, emit);
    OUTPUT("log_at_most_five(3):\n");
    log_at_most_five(3, emit);

    // derived sequences
    ////////////////////

    OUTPUT(&format!("\neven_index_elements(&[5, 6, 2, 7, 8, 9, 4, 5]): {:?}\n", even_index_elements(&[5, 6, 2, 7, 8, 9, 4, 5])));
    OUTPUT(&format!("subtotals_naive(&[23, 92, 12, 34, 94]): {:?}\n",           subtotals_naive(&[23i64, 92, 12, 34, 94])));
}

/// sinks one catalog emission per line into [OUTPUT]
fn emit(line: &str) {
    OUTPUT(&format!("{}\n", line));
}
