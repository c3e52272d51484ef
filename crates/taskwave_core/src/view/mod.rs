//! Read-side projections consumed by rendering layers.
//!
//! # Responsibility
//! - Provide pure filter/sort/statistics functions over the task collection.
//! - Own the caller-held selection enums and their wire names.

pub mod projection;
