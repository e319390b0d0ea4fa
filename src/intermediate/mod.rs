//! Intermediate operations: adapters that turn one iterator into another.
//! Nothing runs until a terminal operation pulls values through.

pub mod distinct;
pub mod filter;
pub mod flat_map;
pub mod limit_skip;
pub mod map;
pub mod parallel;
pub mod peek;
pub mod sorted;
