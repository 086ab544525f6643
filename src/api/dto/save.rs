//! DTOs for the alias creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to store a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// The alias to store the URL under.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: String,
}

/// Response for a stored alias.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: i64,
    pub alias: String,
}
