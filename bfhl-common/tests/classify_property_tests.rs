//! Property-based tests for token classification
//!
//! Tokens are drawn from a mix of digit strings, letter strings and
//! arbitrary text so every category is exercised.

use bfhl_common::classify::{classify, is_alpha_token, is_digit_token};
use num_bigint::BigUint;
use proptest::prelude::*;

fn arbitrary_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,30}",
        "[a-zA-Z]{1,12}",
        "[a-zA-Z0-9]{0,6}",
        "[!-/:-@\\[-`{-~ ]{0,4}",
        any::<String>(),
    ]
}

/// Keeps tokens matching `pred`, in input order
fn filtered(tokens: &[String], pred: impl Fn(&str) -> bool) -> Vec<String> {
    tokens.iter().filter(|t| pred(t.as_str())).cloned().collect()
}

proptest! {
    #[test]
    fn prop_partition_is_total(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let result = classify(&tokens).unwrap();

        prop_assert_eq!(result.token_count(), tokens.len());
    }

    #[test]
    fn prop_categories_preserve_input_order(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let result = classify(&tokens).unwrap();

        let numbers = filtered(&tokens, is_digit_token);
        let odd: Vec<String> = numbers
            .iter()
            .filter(|t| t.as_bytes()[t.len() - 1] % 2 == 1)
            .cloned()
            .collect();
        let even: Vec<String> = numbers
            .iter()
            .filter(|t| t.as_bytes()[t.len() - 1] % 2 == 0)
            .cloned()
            .collect();
        let alphabets: Vec<String> = filtered(&tokens, is_alpha_token)
            .iter()
            .map(|t| t.to_ascii_uppercase())
            .collect();
        let special = filtered(&tokens, |t| !is_digit_token(t) && !is_alpha_token(t));

        prop_assert_eq!(result.odd_numbers, odd);
        prop_assert_eq!(result.even_numbers, even);
        prop_assert_eq!(result.alphabets, alphabets);
        prop_assert_eq!(result.special_characters, special);
    }

    #[test]
    fn prop_sum_matches_numeric_total(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let result = classify(&tokens).unwrap();

        let expected: BigUint = result
            .odd_numbers
            .iter()
            .chain(result.even_numbers.iter())
            .map(|t| t.parse::<BigUint>().unwrap())
            .sum();

        prop_assert_eq!(&result.sum, &expected);
        prop_assert!(!result.sum.to_string().starts_with('0') || result.sum.to_string() == "0");
    }

    #[test]
    fn prop_concat_length_matches_letter_count(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let result = classify(&tokens).unwrap();

        let letters: usize = result.alphabets.iter().map(|t| t.len()).sum();
        prop_assert_eq!(result.concat_string.len(), letters);
    }

    #[test]
    fn prop_concat_alternates_case(tokens in prop::collection::vec("[a-zA-Z]{1,8}", 0..20)) {
        let result = classify(&tokens).unwrap();

        for (idx, ch) in result.concat_string.chars().enumerate() {
            if idx % 2 == 0 {
                prop_assert!(ch.is_ascii_uppercase(), "index {} should be uppercase", idx);
            } else {
                prop_assert!(ch.is_ascii_lowercase(), "index {} should be lowercase", idx);
            }
        }
    }
}
