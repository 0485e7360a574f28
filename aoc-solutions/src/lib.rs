//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `AutoRegisterSolver`,
//! so linking this crate is enough for `register_all_plugins` to find it.

pub mod parsing;

#[cfg(feature = "year-2021")]
pub mod year_2021;
