//! Palindrome Core Library
//!
//! Core functionality for palindrome candidate handling:
//! - Candidate validation against a precompiled pattern
//! - Workflow dispatch to the fixed result messages
//! - Palindrome arrangement from character frequencies
//! - JSON-RPC protocol types shared with the server
//!
//! No async and no IO within this crate.

pub mod arrange;
pub mod candidate;
pub mod error;
pub mod protocol;
pub mod workflow;

pub use arrange::make_palindrome_from;
pub use candidate::{is_palindrome_candidate, try_is_palindrome_candidate};
pub use error::PalindromeError;
pub use protocol::{Request, Response};
pub use workflow::{execute, try_execute, Outcome};
