//! HTTP middleware for request processing and protection.
//!
//! Provides Basic authentication and request-scoped logging middleware.

pub mod basic_auth;
pub mod request_log;
