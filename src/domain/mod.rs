//! Domain layer: repository trait definitions.

pub mod repositories;
