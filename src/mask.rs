//! Masking for display and logs.
//!
//! Only the last four digits of a card number are ever shown, and the CVV
//! is never shown at all. Everything the crate logs goes through here.

use crate::format::{grouping_for, SEPARATOR};
use crate::CardBrand;

/// Character that replaces hidden digits.
pub const MASK_CHAR: char = '*';

/// Masks all but the last four digits, keeping the brand's grouping.
///
/// Digits beyond the grouping's capacity are dropped first, as the field does.
///
/// # Example
///
/// ```
/// use card_form::{validate, CardBrand};
///
/// let number = validate("4539148803436467").unwrap();
/// assert_eq!(number.masked(), "**** **** **** 6467");
///
/// let number = validate("371449635398433").unwrap();
/// assert_eq!(number.masked(), "**** ****** *8433");
/// ```
pub fn mask_digits(digits: &[u8], brand: CardBrand) -> String {
    let grouping = grouping_for(brand);
    let digits = &digits[..digits.len().min(grouping.max_digits())];
    let visible_from = digits.len().saturating_sub(4);
    let mut chars = digits.iter().enumerate().map(|(i, &d)| {
        if i < visible_from {
            MASK_CHAR
        } else {
            (b'0' + d) as char
        }
    });

    let mut result = String::with_capacity(digits.len() + 3);
    for &size in grouping.blocks() {
        let block: String = chars.by_ref().take(size).collect();
        if block.is_empty() {
            break;
        }
        if !result.is_empty() {
            result.push(SEPARATOR);
        }
        result.push_str(&block);
    }
    result
}

/// Masks the digits of arbitrary user input, for log lines.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_input;
///
/// assert_eq!(mask_input("4539 1488 0343 6467"), "**** **** **** 6467");
/// assert_eq!(mask_input("45"), "45");
/// ```
pub fn mask_input(input: &str) -> String {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    mask_digits(&digits, crate::detect::classify_digits(&digits))
}

/// One mask character per CVV character.
pub fn mask_cvv(cvv: &str) -> String {
    cvv.chars().map(|_| MASK_CHAR).collect()
}
