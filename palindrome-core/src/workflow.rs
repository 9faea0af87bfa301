//! Workflow dispatch
//!
//! Runs the candidate check and maps its result onto one of two fixed
//! messages. No palindrome check is performed here.

use std::fmt;

use crate::candidate::{is_palindrome_candidate, try_is_palindrome_candidate};
use crate::error::PalindromeError;

pub const PLACEHOLDER_MESSAGE: &str = "palindrome placeholder";

pub const NOT_A_CANDIDATE_MESSAGE: &str =
    "Not a palindrome candidate. Contains characters other than lowercase alphabetic characters";

/// Result of a single workflow run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Candidate,
    NotACandidate,
}

impl Outcome {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Outcome::Candidate
        } else {
            Outcome::NotACandidate
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Candidate => PLACEHOLDER_MESSAGE,
            Outcome::NotACandidate => NOT_A_CANDIDATE_MESSAGE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn execute(input: &str) -> String {
    Outcome::from_match(is_palindrome_candidate(input))
        .message()
        .to_string()
}

/// Like [`execute`], but a broken candidate pattern is returned as an error.
pub fn try_execute(input: &str) -> Result<Outcome, PalindromeError> {
    let matched = try_is_palindrome_candidate(input)?;
    Ok(Outcome::from_match(matched))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_empty() {
        assert_eq!(execute(""), "palindrome placeholder");
    }

    #[test]
    fn test_execute_candidate() {
        assert_eq!(execute("abcdef"), "palindrome placeholder");
    }

    #[test]
    fn test_execute_not_a_candidate() {
        assert_eq!(
            execute("ab4cdef"),
            "Not a palindrome candidate. Contains characters other than lowercase alphabetic characters"
        );
    }

    #[test]
    fn test_try_execute() {
        assert_eq!(try_execute("abc"), Ok(Outcome::Candidate));
        assert_eq!(try_execute("ABC"), Ok(Outcome::NotACandidate));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Candidate.to_string(), PLACEHOLDER_MESSAGE);
        assert_eq!(Outcome::NotACandidate.to_string(), NOT_A_CANDIDATE_MESSAGE);
    }
}
