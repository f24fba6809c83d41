//! Validation of caller-chosen aliases.

use crate::domain::errors::AliasError;
use crate::domain::reserved::is_reserved;

pub const MIN_ALIAS_LENGTH: usize = 3;
pub const MAX_ALIAS_LENGTH: usize = 20;

/// Validates a custom alias and returns its normalized (lowercased) form.
///
/// # Rules
///
/// Checked in this order:
///
/// 1. Length: 3-20 characters
/// 2. Not a reserved route segment (case-insensitive)
/// 3. After removing `-` and `_`, only ASCII letters and digits remain
///
/// Storage and lookup both use the lowercased form, so aliases behave
/// case-insensitively at creation time.
///
/// # Errors
///
/// Returns the [`AliasError`] for the first rule violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_alias("My-Link_1").unwrap(), "my-link_1");
/// assert!(validate_alias("ab").is_err());     // Too short
/// assert!(validate_alias("stats").is_err());  // Reserved
/// assert!(validate_alias("ab!").is_err());    // Bad character
/// ```
pub fn validate_alias(alias: &str) -> Result<String, AliasError> {
    let length = alias.chars().count();
    if !(MIN_ALIAS_LENGTH..=MAX_ALIAS_LENGTH).contains(&length) {
        return Err(AliasError::InvalidLength {
            min: MIN_ALIAS_LENGTH,
            max: MAX_ALIAS_LENGTH,
            actual: length,
        });
    }

    if is_reserved(alias) {
        return Err(AliasError::ReservedWord(alias.to_string()));
    }

    let core = alias.chars().filter(|c| *c != '-' && *c != '_');
    let mut core = core.peekable();
    if core.peek().is_none() || !core.all(|c| c.is_ascii_alphanumeric()) {
        return Err(AliasError::InvalidCharacters);
    }

    Ok(alias.to_ascii_lowercase())
}
