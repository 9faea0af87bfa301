//! Palindrome arrangement
//!
//! Rearranges the characters of a candidate string into a palindrome, when
//! the character counts allow one.

use std::collections::BTreeMap;

use crate::candidate::try_is_palindrome_candidate;
use crate::error::PalindromeError;

/// Count occurrences of each character, ordered by character.
pub fn character_frequencies(input: &str) -> BTreeMap<char, u64> {
    let mut freqs = BTreeMap::new();
    for c in input.chars() {
        *freqs.entry(c).or_insert(0) += 1;
    }
    freqs
}

fn unpaired_count(freqs: &BTreeMap<char, u64>) -> usize {
    freqs.values().filter(|count| *count % 2 == 1).count()
}

/// A palindrome exists only when at most one character has an odd count.
pub fn has_at_most_one_unpaired(freqs: &BTreeMap<char, u64>) -> bool {
    unpaired_count(freqs) <= 1
}

/// Lay the characters out as a palindrome.
///
/// Pairs are written from both ends inward in character order. The extra
/// occurrence of an odd-count character goes in the middle.
pub fn arrange(freqs: &BTreeMap<char, u64>) -> Result<String, PalindromeError> {
    let count = unpaired_count(freqs);
    if count > 1 {
        return Err(PalindromeError::Unpaired { count });
    }

    let len = freqs
        .values()
        .try_fold(0usize, |acc, &n| {
            usize::try_from(n).ok().and_then(|n| acc.checked_add(n))
        })
        .ok_or(PalindromeError::TooLong)?;
    if len == 0 {
        return Ok(String::new());
    }

    let mut out = vec!['\0'; len];
    let mut left = 0;
    let mut right = len - 1;

    for (&c, &count) in freqs {
        let mut remaining = count;
        if remaining % 2 == 1 {
            out[len / 2] = c;
            remaining -= 1;
        }
        while remaining > 0 {
            out[left] = c;
            out[right] = c;
            left += 1;
            right = right.saturating_sub(1);
            remaining -= 2;
        }
    }

    Ok(out.into_iter().collect())
}

/// Build a palindrome from the characters of `input`.
pub fn make_palindrome_from(input: &str) -> Result<String, PalindromeError> {
    if input.is_empty() {
        return Err(PalindromeError::Empty);
    }
    if !try_is_palindrome_candidate(input)? {
        return Err(PalindromeError::not_a_candidate(input));
    }

    let palindrome = arrange(&character_frequencies(input))?;
    log::debug!("arranged {:?} into {:?}", input, palindrome);
    Ok(palindrome)
}
