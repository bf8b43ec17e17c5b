//! Luhn (mod 10) checksum.
//!
//! Digits are scanned from the most significant position and every digit
//! at an even zero-based index is doubled. For even lengths (the 16-digit
//! default grouping, 14-digit Diners Club) this agrees with doubling every
//! second digit counted from the right; for odd lengths such as 15-digit
//! American Express numbers it does not.

/// Doubled digit with 9 subtracted when the result exceeds 9, indexed by digit.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

#[inline]
fn weighted(index: usize, digit: u8) -> u32 {
    if index % 2 == 0 {
        DOUBLE_TABLE[digit as usize] as u32
    } else {
        digit as u32
    }
}

/// Validates a sequence of digit values (0-9).
///
/// Empty input is invalid.
///
/// # Example
///
/// ```
/// use card_form::luhn::validate;
///
/// assert!(validate(&[4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7]));
/// assert!(!validate(&[4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 8]));
/// assert!(!validate(&[]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| weighted(i, d))
        .sum()
}

/// Computes the check digit that makes `digits` followed by it valid.
///
/// The check digit lands at index `digits.len()`, so whether it is doubled
/// depends on the final length.
///
/// # Example
///
/// ```
/// use card_form::luhn::generate_check_digit;
///
/// let partial = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6];
/// assert_eq!(generate_check_digit(&partial), 7);
///
/// let amex = [3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3];
/// assert_eq!(generate_check_digit(&amex), 3);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    let sum = compute_checksum(digits);
    let position = digits.len();
    // the weighting is a permutation of 0-9, so exactly one digit fits
    (0..10u8)
        .find(|&d| (sum + weighted(position, d)) % 10 == 0)
        .unwrap_or(0)
}

/// Returns true if the digits in `input` pass the checksum.
///
/// Non-digit characters are ignored. Input without digits is invalid.
pub fn passes(input: &str) -> bool {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    validate(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(passes("4539148803436467"));
        assert!(passes("4111111111111111"));
        assert!(passes("5555555555554444"));
        assert!(passes("6011111111111117"));
        assert!(passes("3530111333300000"));
        assert!(passes("30569309025904"));
        // odd lengths
        assert!(passes("371449635398433"));
        assert!(passes("378282246310006"));
        assert!(passes("340000000000000"));
    }

    #[test]
    fn test_odd_length_doubles_leading_digit() {
        // valid when doubling from the right, invalid here
        assert!(!passes("371449635398431"));
        assert!(!passes("378282246310005"));
        assert!(!passes("340000000000009"));

        // 3 -> 6 at index 0, plus 4 at index 1: 10
        assert!(passes("34000"));
        assert_eq!(compute_checksum(&[3, 4, 0, 0, 0]), 10);
    }

    #[test]
    fn test_single_digit_mutation() {
        assert!(!passes("4539148803436468"));
        assert!(!passes("5539148803436467"));
        assert!(!passes("371449635398432"));
    }

    #[test]
    fn test_ignores_separators() {
        assert!(passes("4539 1488 0343 6467"));
        assert!(passes("3714-496353-98433"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
        assert!(!passes(""));
        assert!(!passes(" - "));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
    }

    #[test]
    fn test_generate_check_digit() {
        assert_eq!(generate_check_digit(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]), 1);
        assert_eq!(generate_check_digit(&[3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3]), 3);
        assert_eq!(generate_check_digit(&[9, 7, 9, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 3);
        assert_eq!(generate_check_digit(&[]), 0);
    }

    #[test]
    fn test_generated_digit_validates_every_length() {
        let base = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5, 9, 1, 2];
        for len in 1..base.len() {
            let mut digits = base[..len].to_vec();
            digits.push(generate_check_digit(&digits));
            assert!(validate(&digits), "{:?}", digits);
        }
    }

    #[test]
    fn test_even_lengths_match_trailing_anchor() {
        let trailing = |digits: &[u8]| -> u32 {
            digits
                .iter()
                .rev()
                .enumerate()
                .map(|(i, &d)| if i % 2 == 1 { DOUBLE_TABLE[d as usize] as u32 } else { d as u32 })
                .sum()
        };
        let visa: [u8; 16] = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7];
        let diners: [u8; 14] = [3, 0, 5, 6, 9, 3, 0, 9, 0, 2, 5, 9, 0, 4];
        assert_eq!(compute_checksum(&visa), trailing(&visa));
        assert_eq!(compute_checksum(&diners), trailing(&diners));

        let amex: [u8; 15] = [3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3, 1];
        assert_ne!(compute_checksum(&amex) % 10, trailing(&amex) % 10);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
