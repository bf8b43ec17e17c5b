//! Form configuration.
//!
//! Defaults reproduce the stock widget: a 12-year picker, a 4-character
//! CVV field, and the Visa logo for numbers whose brand is unknown.
//! With the `serde` feature the config can be loaded from JSON; missing
//! fields take their defaults.

use crate::error::ConfigError;
use crate::expiry::DEFAULT_YEAR_SPAN;
use crate::CardBrand;

/// What the preview shows for a number no brand pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BrandFallback {
    /// Show Visa artwork.
    #[default]
    Visa,
    /// Show the generic "unknown" artwork.
    Unknown,
}

impl BrandFallback {
    /// Resolves a classified brand to the brand whose artwork is shown.
    #[inline]
    pub const fn resolve(&self, brand: CardBrand) -> CardBrand {
        match (brand, self) {
            (CardBrand::Unknown, Self::Visa) => CardBrand::Visa,
            (brand, _) => brand,
        }
    }
}

/// Tunables of the card form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FormConfig {
    /// Years offered by the year picker, starting at the current year.
    pub year_span: u16,
    /// Maximum CVV length (3 or 4).
    pub cvv_max_len: usize,
    /// Artwork for unknown brands.
    pub brand_fallback: BrandFallback,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            year_span: DEFAULT_YEAR_SPAN,
            cvv_max_len: 4,
            brand_fallback: BrandFallback::default(),
        }
    }
}

impl FormConfig {
    /// Checks field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.year_span == 0 {
            return Err(ConfigError::OutOfRange {
                field: "year_span",
                expected: "at least 1",
            });
        }
        if !(3..=4).contains(&self.cvv_max_len) {
            return Err(ConfigError::OutOfRange {
                field: "cvv_max_len",
                expected: "3 or 4",
            });
        }
        Ok(())
    }

    /// Parses and checks a JSON config.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::config::{BrandFallback, FormConfig};
    ///
    /// let config = FormConfig::from_json_str(r#"{ "brand_fallback": "unknown" }"#).unwrap();
    /// assert_eq!(config.brand_fallback, BrandFallback::Unknown);
    /// assert_eq!(config.year_span, 12);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and checks a JSON config file.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
