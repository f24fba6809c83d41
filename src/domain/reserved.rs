//! Top-level route segments shared by the router and the alias validator.
//!
//! A custom alias equal to one of these would be shadowed by a fixed route,
//! so [`RESERVED_ALIASES`] is the single list both sides read from.

pub const SHORTEN_SEGMENT: &str = "shorten";
pub const URLS_SEGMENT: &str = "urls";
pub const STATS_SEGMENT: &str = "stats";
pub const HEALTH_SEGMENT: &str = "health";

/// Prefix of the QR route. Not reserved: `/qr/{code}` has two segments and
/// never collides with `/{code}`.
pub const QR_SEGMENT: &str = "qr";

pub const RESERVED_ALIASES: &[&str] = &[URLS_SEGMENT, SHORTEN_SEGMENT, STATS_SEGMENT, HEALTH_SEGMENT];

/// Returns true if `alias` (compared case-insensitively) is reserved.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
}
