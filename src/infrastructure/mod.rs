//! Infrastructure layer: concrete storage implementations.

pub mod persistence;
