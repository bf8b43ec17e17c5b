//! Core card types.
//!
//! This module provides the `CardBrand` enum for identifying card networks
//! and the `ValidatedNumber` struct for holding a checksum-verified number.

use std::fmt;
use zeroize::Zeroize;

/// Card networks the entry form recognizes from the leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// Visa - Prefix 4
    Visa,
    /// American Express - Prefix 34, 37
    Amex,
    /// Mastercard - Prefix 51-55
    Mastercard,
    /// Discover - Prefix 6011
    Discover,
    /// UnionPay - Prefix 62
    UnionPay,
    /// Troy - Turkish payment system, Prefix 9792
    Troy,
    /// Diners Club - Prefix 300-305, 309, 36, 38, 39
    DinersClub,
    /// JCB - Prefix 3528-3529, 353-358
    Jcb,
    /// No prefix matched (also the result for empty input).
    Unknown,
}

impl CardBrand {
    /// Every recognized brand, in classification order.
    pub const KNOWN: [CardBrand; 8] = [
        Self::Visa,
        Self::Amex,
        Self::Mastercard,
        Self::Discover,
        Self::UnionPay,
        Self::Troy,
        Self::DinersClub,
        Self::Jcb,
    ];

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Amex => "American Express",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::UnionPay => "UnionPay",
            Self::Troy => "Troy",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the lowercase tag used for asset names (`visa`, `amex`, ...).
    #[inline]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Amex => "amex",
            Self::Mastercard => "mastercard",
            Self::Discover => "discover",
            Self::UnionPay => "unionpay",
            Self::Troy => "troy",
            Self::DinersClub => "dinersclub",
            Self::Jcb => "jcb",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a brand tag as produced by [`CardBrand::slug`].
    ///
    /// Also accepts a few common spellings (`mc`, `diners`, `union pay`).
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "amex" | "american express" => Some(Self::Amex),
            "mastercard" | "mc" => Some(Self::Mastercard),
            "discover" => Some(Self::Discover),
            "unionpay" | "union pay" => Some(Self::UnionPay),
            "troy" => Some(Self::Troy),
            "dinersclub" | "diners" | "diners club" => Some(Self::DinersClub),
            "jcb" => Some(Self::Jcb),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Returns true unless this is [`CardBrand::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maximum number of digits any grouping scheme holds (4-4-4-4).
pub const MAX_CARD_DIGITS: usize = 16;

/// Maximum number of characters the card number field accepts.
///
/// Sixteen digits plus three separators.
pub const MAX_INPUT_LEN: usize = 19;

/// A card number that passed the Luhn checksum.
///
/// The digits are stored in a fixed-size array that is zeroed when the
/// struct is dropped. `Debug` and `Display` only show the masked form.
#[derive(Clone)]
pub struct ValidatedNumber {
    brand: CardBrand,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl ValidatedNumber {
    #[inline]
    pub(crate) fn new(brand: CardBrand, digits: [u8; MAX_CARD_DIGITS], digit_count: u8) -> Self {
        Self {
            brand,
            digits,
            digit_count,
        }
    }

    /// Returns the brand classified from the number's prefix.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits (or all of them for shorter numbers).
    pub fn last_four(&self) -> String {
        let len = self.length();
        let start = len.saturating_sub(4);
        to_string(&self.digits[start..len])
    }

    /// Returns the full number as a string.
    ///
    /// Never log the result; use [`ValidatedNumber::masked`] instead.
    pub fn number(&self) -> String {
        to_string(self.digits())
    }

    /// Returns the number formatted for display with its brand grouping.
    pub fn formatted(&self) -> String {
        crate::format::format_number(&self.number(), self.brand)
    }

    /// Returns the masked number (`**** **** **** 1111`).
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(self.digits(), self.brand)
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.length()]
    }
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

impl fmt::Debug for ValidatedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedNumber")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

impl Drop for ValidatedNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
