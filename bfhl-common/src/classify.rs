//! Token classification
//!
//! Splits an ordered list of string tokens into four disjoint categories:
//! - Digit-only tokens, routed to odd or even by numeric value
//! - Letter-only tokens, uppercased
//! - Everything else (empty strings, mixed content, punctuation, unicode)
//!
//! Numeric tokens are summed with an unbounded integer, so arbitrarily long
//! digit strings never overflow. Letters from alphabetic tokens are pooled,
//! reversed and re-cased into an alternating-caps string.
//!
//! Every category preserves the input order of the tokens it receives.

use num_bigint::BigUint;
use num_integer::Integer;
use thiserror::Error;

/// Classification failure
///
/// Well-typed input always classifies; this guards the numeric parse step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A token passed the digit predicate but did not parse as an integer
    #[error("Invalid numeric token: {0:?}")]
    InvalidNumber(String),
}

/// Result of classifying one input array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Digit-only tokens with odd value, original string form
    pub odd_numbers: Vec<String>,
    /// Digit-only tokens with even value, original string form
    pub even_numbers: Vec<String>,
    /// Letter-only tokens, uppercased
    pub alphabets: Vec<String>,
    /// All remaining tokens, verbatim
    pub special_characters: Vec<String>,
    /// Total of all numeric tokens
    pub sum: BigUint,
    /// Reversed letter pool with alternating caps
    pub concat_string: String,
}

impl Classification {
    /// Number of tokens placed across all four categories
    pub fn token_count(&self) -> usize {
        self.odd_numbers.len()
            + self.even_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
    }
}

/// True when `token` is non-empty and made only of ASCII `0`-`9`
pub fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// True when `token` is non-empty and made only of ASCII letters
pub fn is_alpha_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Classify `tokens` in order
///
/// # Errors
/// Returns [`ClassifyError::InvalidNumber`] if a digit-only token fails to
/// parse. No partial result is returned.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<Classification, ClassifyError> {
    let mut result = Classification::default();
    let mut letter_pool: Vec<char> = Vec::new();

    for token in tokens {
        let token = token.as_ref();

        if is_digit_token(token) {
            let value = BigUint::parse_bytes(token.as_bytes(), 10)
                .ok_or_else(|| ClassifyError::InvalidNumber(token.to_string()))?;
            if value.is_even() {
                result.even_numbers.push(token.to_string());
            } else {
                result.odd_numbers.push(token.to_string());
            }
            result.sum += value;
        } else if is_alpha_token(token) {
            let upper = token.to_ascii_uppercase();
            letter_pool.extend(upper.chars());
            result.alphabets.push(upper);
        } else {
            result.special_characters.push(token.to_string());
        }
    }

    result.concat_string = alternating_caps_reversed(&letter_pool);
    Ok(result)
}

/// Reverse `letters`, then uppercase even positions and lowercase odd ones
pub fn alternating_caps_reversed(letters: &[char]) -> String {
    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, ch)| {
            if idx % 2 == 0 {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}
