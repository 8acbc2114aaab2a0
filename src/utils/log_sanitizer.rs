//! Log sanitization utilities for masking sensitive data.
//!
//! This module provides functions to mask usernames before logging,
//! preventing accidental exposure of PII.

/// Mask a username for safe logging.
///
/// Shows only the first 3 characters followed by asterisks.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_username("johndoe"), "joh***");
/// assert_eq!(mask_username("ab"), "ab***");
/// ```
pub fn mask_username(username: &str) -> String {
    // Take characters, not bytes: slicing by byte index panics inside
    // multibyte usernames.
    let visible: String = username.chars().take(3).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_username() {
        assert_eq!(mask_username("johndoe"), "joh***");
        assert_eq!(mask_username("ab"), "ab***");
        assert_eq!(mask_username("a"), "a***");
    }

    #[test]
    fn test_mask_username_empty() {
        assert_eq!(mask_username(""), "***");
    }

    #[test]
    fn test_mask_username_multibyte() {
        assert_eq!(mask_username("éé"), "éé***");
        assert_eq!(mask_username("日本語のユーザー"), "日本語***");
    }
}
