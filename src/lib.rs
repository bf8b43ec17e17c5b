//! # card_form
//!
//! Core of a credit card entry form: brand detection from the leading
//! digits, as-you-type grouping, Luhn validation, expiry pickers, focus
//! tracking and a card preview model that flips to the back while the
//! CVV is being entered. Rendering and animation are left to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{classify, format_number, is_valid, CardBrand};
//! use card_form::expiry::min_valid_month;
//!
//! assert_eq!(classify("3714 4963"), CardBrand::Amex);
//! assert_eq!(format_number("371449635398433", CardBrand::Amex), "3714 496353 98433");
//! assert!(is_valid("4539148803436467"));
//! assert_eq!(min_valid_month(2026, 2026, 7), 7);
//! ```
//!
//! ## Form State
//!
//! ```rust
//! use card_form::form::CardForm;
//! use card_form::focus::Field;
//! use card_form::format::EditKind;
//!
//! let mut form = CardForm::default();
//! form.input_number("4539148803436467", EditKind::Insert);
//! form.input_name("JANE DOE");
//! form.focus(Field::Cvv);
//!
//! let preview = form.preview();
//! assert!(preview.flipped);
//! assert_eq!(preview.number_text(), "4539 1488 0343 6467");
//!
//! // Rejections are values, not alerts
//! form.input_number("4539148803436468", EditKind::Insert);
//! assert!(form.submit().is_err());
//! ```
//!
//! ## Supported Card Brands
//!
//! Matched in this order, first match wins:
//!
//! | Brand | Prefix | Grouping |
//! |-------|--------|----------|
//! | Visa | 4 | 4-4-4-4 |
//! | American Express | 34, 37 | 4-6-5 |
//! | Mastercard | 51-55 | 4-4-4-4 |
//! | Discover | 6011 | 4-4-4-4 |
//! | UnionPay | 62 | 4-4-4-4 |
//! | Troy | 9792 | 4-4-4-4 |
//! | Diners Club | 300-305, 309, 36, 38, 39 | 4-6-4 |
//! | JCB | 3528-3529, 353-358 | 4-4-4-4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | JSON config files and serializable previews |
//! | `cli` | `cardform` command-line tool |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - `ValidatedNumber` and `CardForm` zeroize entered data on drop
//! - `Debug` and `Display` show masked numbers only
//! - Logs carry masked numbers and never the CVV
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod config;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod focus;
pub mod form;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod preview;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardBrand, ValidatedNumber, MAX_CARD_DIGITS, MAX_INPUT_LEN};
pub use config::{BrandFallback, FormConfig};
pub use detect::classify;
pub use error::{ConfigError, ValidationError};
pub use expiry::min_valid_month;
pub use form::CardForm;
pub use format::{format_number, grouping_for, Grouping};
pub use validate::{is_valid, validate};
