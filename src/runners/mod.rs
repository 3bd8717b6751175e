//! Runners execute the algorithms under analysis -- two passes at different input
//! sizes -- gather their measurements and check the observed growth class.

pub(crate) mod common;
pub mod standard;

pub use common::count_emissions;
