//! # Stream Pipelines
//!
//! A catalogue of collection-pipeline examples built on Rust iterators and
//! Rayon. Every topic works on small in-memory fixtures and prints its inputs
//! and outputs.
//!
//! ## Topics Covered
//!
//! 1. **Intermediate Operations**
//!    - filter, map, flat_map
//!    - distinct (first occurrence wins)
//!    - sorted (stable, natural order and by key)
//!    - limit / skip and pagination
//!    - peek via `inspect`
//!
//! 2. **Terminal Operations**
//!    - collect into sets, strings, groups and partitions
//!    - count, for_each
//!    - any / all / none, find first, find any
//!    - min / max, reduce
//!    - boxed slices and fixed arrays
//!
//! 3. **Parallel Iteration with Rayon**
//!    - parallel filter / map / reduce / sort
//!    - sequential vs parallel timing, size sweep, CPU vs I/O bound work
//!    - custom thread pools and shared state
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Intermediate operations
//! cargo run --bin p1_filter
//! cargo run --bin p1_map
//! cargo run --bin p1_flat_map
//! cargo run --bin p1_distinct
//! cargo run --bin p1_sorted
//! cargo run --bin p1_limit_skip
//! cargo run --bin p1_peek
//!
//! # Pattern 2: Terminal operations
//! cargo run --bin p2_collect
//! cargo run --bin p2_count
//! cargo run --bin p2_for_each
//! cargo run --bin p2_match_find
//! cargo run --bin p2_min_max
//! cargo run --bin p2_reduce
//! cargo run --bin p2_to_array
//!
//! # Pattern 3: Parallel iteration
//! cargo run --release --bin p3_parallel_streams
//!
//! # Everything, or a selection
//! cargo run --bin catalogue -- list
//! cargo run --bin catalogue -- run filter reduce
//! cargo run --bin catalogue -- all
//! ```
//!
//! Settings are read from `streams.toml` when present; see [`config`].

pub mod catalogue;
pub mod config;
pub mod employee;
pub mod error;
pub mod intermediate;
pub mod logging;
pub mod report;
pub mod terminal;

pub use config::Config;
pub use employee::{Badge, Employee, SalaryBand};
pub use error::{PipelineError, Result};
pub use report::Report;
