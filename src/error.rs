//! Error types for card number validation and form configuration.

use crate::CardBrand;
use std::fmt;

/// Reasons a submitted card number is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The input contains only separators or other non-digit characters.
    NoDigits,

    /// The number has more digits than the brand's grouping holds.
    TooLong {
        /// The classified brand.
        brand: CardBrand,
        /// The actual number of digits.
        length: usize,
        /// Digits the brand's grouping holds.
        maximum: usize,
    },

    /// The Luhn checksum failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::NoDigits => write!(f, "card number contains no digits"),

            Self::TooLong {
                brand,
                length,
                maximum,
            } => {
                write!(
                    f,
                    "{} numbers have at most {} digits, got {}",
                    brand, maximum, length
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid card number (Luhn check failed)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading or checking a [`FormConfig`](crate::config::FormConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),

    /// The config text is not valid JSON for the expected shape.
    #[cfg(feature = "serde")]
    Parse(serde_json::Error),

    /// A field holds a value outside its allowed range.
    OutOfRange {
        /// The offending field.
        field: &'static str,
        /// The allowed range, human readable.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {}", e),
            #[cfg(feature = "serde")]
            Self::Parse(e) => write!(f, "invalid config: {}", e),
            Self::OutOfRange { field, expected } => {
                write!(f, "config field `{}` must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "serde")]
            Self::Parse(e) => Some(e),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
