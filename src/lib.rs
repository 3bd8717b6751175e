#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod complexity_analysis;
pub mod runners;
pub mod utils;
pub mod features;


// exported symbols
pub use {
    features::OUTPUT,
    complexity_analysis::types::BigOAlgorithmComplexity,
    catalog::{
        summation::{add_up_to, add_up_to_closed_form},
        scanning::{count_up_and_down, print_all_pairs, log_at_least_five, log_at_most_five},
        halving::number_of_halves,
        sequences::{even_index_elements, subtotals_naive, subtotals_linear},
    },
    runners::{
        count_emissions,
        standard::{test_algorithm, test_counted_algorithm, test_emitting_algorithm},
    },
};
