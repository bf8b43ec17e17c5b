//! Card number grouping and input formatting.
//!
//! # Grouping Schemes
//!
//! - **American Express**: `#### ###### #####` (4-6-5)
//! - **Diners Club**: `#### ###### ####` (4-6-4)
//! - **Everything else**: `#### #### #### ####` (4-4-4-4)
//!
//! The digit string is always the canonical value. The formatted string is
//! a display derivative and can be recovered from itself by stripping and
//! reformatting.
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_number, format_input, EditKind};
//! use card_form::CardBrand;
//!
//! assert_eq!(format_number("4111111111111111", CardBrand::Visa), "4111 1111 1111 1111");
//! assert_eq!(format_number("371449635398433", CardBrand::Amex), "3714 496353 98433");
//!
//! // Input handler: classify, then format
//! assert_eq!(format_input("3056930902", EditKind::Insert), "3056 930902");
//! ```

use crate::detect::classify;
use crate::CardBrand;

/// Separator placed between digit blocks.
pub const SEPARATOR: char = ' ';

/// A brand's digit blocks and matching placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    blocks: &'static [usize],
    placeholder: &'static str,
}

impl Grouping {
    /// 4-4-4-4, used by every brand without its own scheme.
    pub const DEFAULT: Grouping = Grouping {
        blocks: &[4, 4, 4, 4],
        placeholder: "#### #### #### ####",
    };

    /// 4-6-5, American Express.
    pub const AMEX: Grouping = Grouping {
        blocks: &[4, 6, 5],
        placeholder: "#### ###### #####",
    };

    /// 4-6-4, Diners Club.
    pub const DINERS_CLUB: Grouping = Grouping {
        blocks: &[4, 6, 4],
        placeholder: "#### ###### ####",
    };

    /// Block lengths, left to right.
    #[inline]
    pub const fn blocks(&self) -> &'static [usize] {
        self.blocks
    }

    /// Placeholder glyph string, e.g. `"#### ###### #####"`.
    #[inline]
    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Number of digits the scheme holds.
    pub fn max_digits(&self) -> usize {
        self.blocks.iter().sum()
    }
}

/// Returns the grouping scheme for a brand.
#[inline]
pub const fn grouping_for(brand: CardBrand) -> Grouping {
    match brand {
        CardBrand::Amex => Grouping::AMEX,
        CardBrand::DinersClub => Grouping::DINERS_CLUB,
        _ => Grouping::DEFAULT,
    }
}

/// The kind of edit that produced the current field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditKind {
    /// Typing or pasting.
    #[default]
    Insert,
    /// Backspace or delete.
    Delete,
}

/// Strips everything but ASCII digits.
///
/// # Example
///
/// ```
/// use card_form::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Splits the digits of `input` into the brand's blocks.
///
/// The last block may be short; blocks with no digits are omitted and
/// digits beyond the scheme's capacity are dropped.
///
/// # Example
///
/// ```
/// use card_form::format::split_into_groups;
/// use card_form::CardBrand;
///
/// assert_eq!(split_into_groups("3714496", CardBrand::Amex), vec!["3714", "496"]);
/// ```
pub fn split_into_groups(input: &str, brand: CardBrand) -> Vec<String> {
    let digits = strip_formatting(input);
    let mut rest = digits.as_str();
    let mut groups = Vec::with_capacity(4);

    for &size in grouping_for(brand).blocks() {
        if rest.is_empty() {
            break;
        }
        // ASCII digits only, so byte offsets are char offsets
        let (group, tail) = rest.split_at(size.min(rest.len()));
        groups.push(group.to_string());
        rest = tail;
    }

    groups
}

/// Formats the digits of `input` with the brand's grouping.
///
/// # Example
///
/// ```
/// use card_form::format::format_number;
/// use card_form::CardBrand;
///
/// assert_eq!(format_number("30569309025904", CardBrand::DinersClub), "3056 930902 5904");
/// assert_eq!(format_number("41111", CardBrand::Visa), "4111 1");
/// assert_eq!(format_number("", CardBrand::Visa), "");
/// ```
pub fn format_number(input: &str, brand: CardBrand) -> String {
    let separator = SEPARATOR.to_string();
    split_into_groups(input, brand).join(&separator)
}

/// Formats the current value of the card number field.
///
/// Classifies the digits and formats them for that brand. Separators only
/// go between non-empty blocks, so the result never ends in one: a
/// deletion that leaves a dangling separator (`"4111 "`) comes back as the
/// bare digits (`"4111"`) and the caret stays right after the last digit.
/// Both edit kinds therefore format alike; hosts pass `_edit` through
/// from the input event.
pub fn format_input(value: &str, _edit: EditKind) -> String {
    format_number(value, classify(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_groupings() {
        assert_eq!(
            format_number("4111111111111111", CardBrand::Visa),
            "4111 1111 1111 1111"
        );
        assert_eq!(
            format_number("371449635398433", CardBrand::Amex),
            "3714 496353 98433"
        );
        assert_eq!(
            format_number("30569309025904", CardBrand::DinersClub),
            "3056 930902 5904"
        );
    }

    #[test]
    fn test_partial_blocks() {
        assert_eq!(format_number("4", CardBrand::Visa), "4");
        assert_eq!(format_number("4111", CardBrand::Visa), "4111");
        assert_eq!(format_number("41111", CardBrand::Visa), "4111 1");
        assert_eq!(format_number("3714496353", CardBrand::Amex), "3714 496353");
        assert_eq!(format_number("37144963539", CardBrand::Amex), "3714 496353 9");
    }

    #[test]
    fn test_excess_digits_dropped() {
        assert_eq!(
            format_number("41111111111111119999", CardBrand::Visa),
            "4111 1111 1111 1111"
        );
        assert_eq!(
            format_number("3714496353984339", CardBrand::Amex),
            "3714 496353 98433"
        );
    }

    #[test]
    fn test_format_already_formatted() {
        assert_eq!(
            format_number("4111-1111 1111.1111", CardBrand::Visa),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_number("", CardBrand::Amex), "");
        assert_eq!(format_number("   ", CardBrand::Visa), "");
        assert!(split_into_groups("", CardBrand::Visa).is_empty());
    }

    #[test]
    fn test_grouping_for() {
        assert_eq!(grouping_for(CardBrand::Amex).blocks(), &[4, 6, 5]);
        assert_eq!(grouping_for(CardBrand::DinersClub).blocks(), &[4, 6, 4]);
        assert_eq!(grouping_for(CardBrand::Jcb), Grouping::DEFAULT);
        assert_eq!(grouping_for(CardBrand::Unknown), Grouping::DEFAULT);
    }

    #[test]
    fn test_placeholders_match_blocks() {
        for grouping in [Grouping::DEFAULT, Grouping::AMEX, Grouping::DINERS_CLUB] {
            let lengths: Vec<usize> = grouping.placeholder().split(SEPARATOR).map(str::len).collect();
            assert_eq!(lengths, grouping.blocks());
        }
        assert_eq!(Grouping::DEFAULT.max_digits(), 16);
        assert_eq!(Grouping::AMEX.max_digits(), 15);
        assert_eq!(Grouping::DINERS_CLUB.max_digits(), 14);
    }

    #[test]
    fn test_full_number_fits_input_field() {
        for grouping in [Grouping::DEFAULT, Grouping::AMEX, Grouping::DINERS_CLUB] {
            assert!(grouping.placeholder().len() <= crate::MAX_INPUT_LEN);
        }
        let longest = format_input("4111111111111111111111", EditKind::Insert);
        assert_eq!(longest.len(), crate::MAX_INPUT_LEN);
    }

    #[test]
    fn test_format_input_classifies() {
        assert_eq!(format_input("37144963", EditKind::Insert), "3714 4963");
        assert_eq!(format_input("3714496353", EditKind::Insert), "3714 496353");
        assert_eq!(format_input("4111 11", EditKind::Insert), "4111 11");
    }

    #[test]
    fn test_format_input_never_leaves_trailing_separator() {
        // "4111 1" with the last digit deleted leaves "4111 "
        for value in ["4111 ", "3714 496353 ", "3056 930902 ", "4111 1111  ", " ", ""] {
            let deleted = format_input(value, EditKind::Delete);
            assert!(!deleted.ends_with(SEPARATOR), "{:?}", value);
            assert_eq!(deleted, format_input(value, EditKind::Insert));
        }
        assert_eq!(format_input("4111 ", EditKind::Delete), "4111");
        assert_eq!(format_input("3714 496353 ", EditKind::Delete), "3714 496353");
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_formatting("ab4c1"), "41");
    }
}
