//! Candidate validation
//!
//! A palindrome candidate is any string made up only of lowercase ASCII
//! letters. The empty string qualifies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PalindromeError;

const CANDIDATE_PATTERN_SRC: &str = r"^[a-z]*$";

/// Compiled once per process and shared read-only by every caller.
static CANDIDATE_PATTERN: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(CANDIDATE_PATTERN_SRC));

/// Check whether `input` is a palindrome candidate.
///
/// A pattern that fails to compile is logged and reported as "not a
/// candidate". Use [`try_is_palindrome_candidate`] to observe that failure.
pub fn is_palindrome_candidate(input: &str) -> bool {
    match try_is_palindrome_candidate(input) {
        Ok(matched) => matched,
        Err(e) => {
            log::error!("{}", e);
            false
        }
    }
}

/// Check whether `input` is a palindrome candidate, surfacing pattern errors.
pub fn try_is_palindrome_candidate(input: &str) -> Result<bool, PalindromeError> {
    let pattern = CANDIDATE_PATTERN
        .as_ref()
        .map_err(|e| PalindromeError::pattern(e.to_string()))?;

    let matched = pattern.is_match(input);
    log::debug!("candidate check: input={:?}, matched={}", input, matched);
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(CANDIDATE_PATTERN.is_ok());
    }

    #[test]
    fn test_lowercase_is_candidate() {
        assert!(is_palindrome_candidate("abcdef"));
        assert!(is_palindrome_candidate("a"));
        assert!(is_palindrome_candidate("zzz"));
    }

    #[test]
    fn test_empty_is_candidate() {
        assert!(is_palindrome_candidate(""));
        assert_eq!(try_is_palindrome_candidate(""), Ok(true));
    }

    #[test]
    fn test_other_characters_are_rejected() {
        assert!(!is_palindrome_candidate("ab4cdef"));
        assert!(!is_palindrome_candidate("Abc"));
        assert!(!is_palindrome_candidate("ab c"));
        assert!(!is_palindrome_candidate("a."));
        assert!(!is_palindrome_candidate("=a"));
        assert!(!is_palindrome_candidate("café"));
        assert!(!is_palindrome_candidate("abc\n"));
    }

    #[test]
    fn test_repeated_checks_agree() {
        for input in ["", "abc", "ab4", "ÄÖÜ"] {
            assert_eq!(is_palindrome_candidate(input), is_palindrome_candidate(input));
        }
    }
}
