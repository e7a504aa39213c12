//! Exchange-agnostic catalog domain types.

pub mod summary;
