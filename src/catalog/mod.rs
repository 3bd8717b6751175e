//! The catalog of toy algorithms this crate teaches Big-O notation with.
//!
//! Every function here is an independent leaf: no shared state, no interaction with its
//! siblings, all data living only for the duration of the call. They are meant to be read
//! top-to-bottom, in the order below, contrasting how the operation count grows with `n`:
//!   - [summation] -- the same sum computed in O(n) and in O(1);
//!   - [scanning]  -- sequential scans: O(n) twice-over, O(n²) nested, and scans bounded
//!                    below / above by a constant;
//!   - [halving]   -- repeated halving, the O(log(n)) classic;
//!   - [sequences] -- derived sequences: an O(n) filter and the O(n²) vs O(n) subtotals
//!                    contrast.
//!
//! Rules of thumb when counting operations:
//!   1. arithmetic operations are constant;
//!   2. variable assignment is constant;
//!   3. accessing an element by index is constant;
//!   4. in a loop, the complexity is the length of the loop times the complexity of
//!      whatever happens inside of it.
//!
//! Functions with observable emissions take an injected output sink -- any
//! `FnMut(&str)` -- rather than writing to stdout, so callers (and tests) decide where
//! each emitted line goes. See `runners::common::count_emissions()` for a sink that
//! simply counts, turning the emissions themselves into the measured operation count.

pub mod summation;
pub mod scanning;
pub mod halving;
pub mod sequences;
