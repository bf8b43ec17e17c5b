//! Submit-time validation of the card number.
//!
//! [`is_valid`] is the plain checksum test. [`validate`] is what the form
//! calls on submit: it returns a structured result the caller can render
//! inline, instead of interrupting the user.

use crate::card::{ValidatedNumber, MAX_CARD_DIGITS};
use crate::detect::classify_digits;
use crate::error::ValidationError;
use crate::format::grouping_for;
use crate::luhn;
use zeroize::Zeroize;

/// Returns true if the digits of `input` pass the Luhn checksum.
///
/// Non-digit characters are ignored; input without digits is invalid.
///
/// # Example
///
/// ```
/// use card_form::is_valid;
///
/// assert!(is_valid("4539148803436467"));
/// assert!(!is_valid("4539148803436468"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    luhn::passes(input)
}

/// Validates a card number for submission.
///
/// Separators and other non-digit characters are skipped, matching how
/// the input field strips them. Checks, in order:
/// 1. the input is not empty and contains digits
/// 2. the digit count fits the classified brand's grouping
/// 3. the Luhn checksum
///
/// # Example
///
/// ```
/// use card_form::{validate, CardBrand, ValidationError};
///
/// let number = validate("3714 496353 98433").unwrap();
/// assert_eq!(number.brand(), CardBrand::Amex);
/// assert_eq!(number.last_four(), "8433");
///
/// assert_eq!(validate("4539 1488 0343 6468").unwrap_err(), ValidationError::InvalidChecksum);
/// ```
pub fn validate(input: &str) -> Result<ValidatedNumber, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;
    let mut overflow = 0usize;

    for b in input.bytes().filter(u8::is_ascii_digit) {
        if count < MAX_CARD_DIGITS {
            digits[count] = b - b'0';
            count += 1;
        } else {
            overflow += 1;
        }
    }

    if count == 0 {
        return Err(ValidationError::NoDigits);
    }

    let brand = classify_digits(&digits[..count]);
    let maximum = grouping_for(brand).max_digits();
    let length = count + overflow;
    if length > maximum {
        digits.zeroize();
        return Err(ValidationError::TooLong {
            brand,
            length,
            maximum,
        });
    }

    if !luhn::validate(&digits[..count]) {
        digits.zeroize();
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(ValidatedNumber::new(brand, digits, count as u8))
}
