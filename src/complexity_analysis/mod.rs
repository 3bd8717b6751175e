//! Exports the growth classification functions, as well as the needed types to operate on them. See:
//!   - [count_analysis]
//!   - [time_analysis]
//!   - [types]
//!
//! ... and, most importantly, tests the classification ladder itself. See [complexity_analysis::tests].

mod complexity_analysis;
pub use complexity_analysis::*;
pub mod types;
pub mod count_analysis;
pub mod time_analysis;
