//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upper bound for `expires_in_hours` (roughly one hundred years).
pub const MAX_EXPIRES_IN_HOURS: i64 = 876_000;

/// Request to shorten a single URL.
///
/// URL syntax is checked by the link service so that the same rules apply
/// to every caller; only the numeric range is validated here.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[serde(default)]
    pub url: String,

    /// Hours until the link expires. Absent or `0` means it never expires.
    #[validate(range(min = 0, max = 876_000))]
    pub expires_in_hours: Option<i64>,
}

/// Successful shorten response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}
