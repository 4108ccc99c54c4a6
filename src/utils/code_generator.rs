//! Short code generation and alias validation.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of randomly generated short codes.
const CODE_LENGTH: usize = 8;

/// Grammar shared by user aliases and generated codes.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,20}$").unwrap());

/// Generates a random 8-character alphanumeric short code.
///
/// Uses the thread-local RNG; collision resistance is probabilistic, not
/// cryptographic. Collisions are handled by the allocator's bounded retry.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-provided alias.
///
/// Aliases may contain letters, digits, `-` and `_`, and must be 1-20
/// characters long.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the alias violates the grammar.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, '-' and '_' (max 20 characters)",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
