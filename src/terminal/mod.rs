//! Terminal operations: consume an iterator and produce a value or an effect.

pub mod collect;
pub mod count;
pub mod for_each;
pub mod match_find;
pub mod min_max;
pub mod reduce;
pub mod to_array;
