//! Card brand classification from the leading digits.
//!
//! Several prefixes overlap (a `3` may open an Amex, Diners Club or JCB
//! number), so classification walks [`BRAND_PATTERNS`] in declaration order
//! and the first matching entry wins.
//!
//! Classification works on partial input: it is re-run on every keystroke
//! and only ever looks at the first four digits.

use crate::CardBrand;

/// A prefix test over digit values (0-9).
pub type PrefixTest = fn(&[u8]) -> bool;

/// Ordered `(test, brand)` pairs. First match wins.
pub const BRAND_PATTERNS: &[(PrefixTest, CardBrand)] = &[
    (is_visa, CardBrand::Visa),
    (is_amex, CardBrand::Amex),
    (is_mastercard, CardBrand::Mastercard),
    (is_discover, CardBrand::Discover),
    (is_unionpay, CardBrand::UnionPay),
    (is_troy, CardBrand::Troy),
    (is_diners_club, CardBrand::DinersClub),
    (is_jcb, CardBrand::Jcb),
];

fn is_visa(d: &[u8]) -> bool {
    matches!(d, [4, ..])
}

fn is_amex(d: &[u8]) -> bool {
    matches!(d, [3, 4 | 7, ..])
}

fn is_mastercard(d: &[u8]) -> bool {
    matches!(d, [5, 1..=5, ..])
}

fn is_discover(d: &[u8]) -> bool {
    matches!(d, [6, 0, 1, 1, ..])
}

fn is_unionpay(d: &[u8]) -> bool {
    matches!(d, [6, 2, ..])
}

fn is_troy(d: &[u8]) -> bool {
    matches!(d, [9, 7, 9, 2, ..])
}

// 300-305, 309, 36, 38, 39
fn is_diners_club(d: &[u8]) -> bool {
    matches!(d, [3, 0, 0..=5 | 9, ..] | [3, 6 | 8 | 9, ..])
}

// 3528-3529, 353-358
fn is_jcb(d: &[u8]) -> bool {
    matches!(d, [3, 5, 2, 8 | 9, ..] | [3, 5, 3..=8, ..])
}

/// Classifies a (possibly partial) sequence of digit values.
///
/// # Example
///
/// ```
/// use card_form::detect::classify_digits;
/// use card_form::CardBrand;
///
/// assert_eq!(classify_digits(&[3, 7, 1, 4]), CardBrand::Amex);
/// assert_eq!(classify_digits(&[]), CardBrand::Unknown);
/// ```
#[inline]
pub fn classify_digits(digits: &[u8]) -> CardBrand {
    BRAND_PATTERNS
        .iter()
        .find(|(test, _)| test(digits))
        .map(|&(_, brand)| brand)
        .unwrap_or(CardBrand::Unknown)
}

/// Classifies the card brand of user input.
///
/// Non-digit characters are ignored, so both raw and formatted input work.
/// Never fails: unmatched prefixes and empty input give
/// [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use card_form::classify;
/// use card_form::CardBrand;
///
/// assert_eq!(classify("4111 1111"), CardBrand::Visa);
/// assert_eq!(classify("3056"), CardBrand::DinersClub);
/// assert_eq!(classify("3530"), CardBrand::Jcb);
/// assert_eq!(classify("1234"), CardBrand::Unknown);
/// ```
pub fn classify(input: &str) -> CardBrand {
    let mut prefix = [0u8; 4];
    let mut count = 0;
    for b in input.bytes().filter(u8::is_ascii_digit).take(prefix.len()) {
        prefix[count] = b - b'0';
        count += 1;
    }
    classify_digits(&prefix[..count])
}
