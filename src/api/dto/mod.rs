//! Data Transfer Objects for the REST API.

pub mod save;
