//! Helper code not specific to any of the crate's main modules

pub mod presentation;
