//! Error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PalindromeError {
    #[error("Candidate pattern failed to compile: {message}")]
    Pattern { message: String },

    #[error("Input is empty")]
    Empty,

    #[error("Not a palindrome candidate: '{input}' contains characters other than lowercase alphabetic characters")]
    NotACandidate { input: String },

    #[error("Cannot arrange a palindrome: {count} characters occur an odd number of times")]
    Unpaired { count: usize },

    #[error("Character counts exceed the addressable palindrome length")]
    TooLong,
}

impl PalindromeError {
    pub fn pattern(message: impl Into<String>) -> Self {
        PalindromeError::Pattern {
            message: message.into(),
        }
    }

    pub fn not_a_candidate(input: impl Into<String>) -> Self {
        PalindromeError::NotACandidate {
            input: input.into(),
        }
    }
}
