//! [crate::Layout] implementations for Rust primitives, arrays and tuples.

pub mod primitives;
pub mod tuple;
