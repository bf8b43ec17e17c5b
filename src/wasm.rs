//! WebAssembly bindings for the card form.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardFormHandle, classify, is_valid } from 'card_form';
//!
//! await init();
//!
//! const form = new CardFormHandle();
//! numberInput.addEventListener('input', (e) => {
//!     form.input_number(e.target.value, e.inputType === 'deleteContentBackward');
//!     e.target.value = form.card_number;
//! });
//! cvvInput.addEventListener('focus', () => form.focus('v-card-cvv'));
//!
//! const result = form.submit();
//! if (!result.valid) {
//!     errorLabel.textContent = result.error;
//! }
//! ```

#![cfg(feature = "wasm")]

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::expiry::YearMonth;
use crate::focus::Field;
use crate::format::EditKind;
use crate::{CardBrand, CardForm};

/// Result of a submit, returned to JavaScript.
#[wasm_bindgen]
pub struct SubmitResult {
    valid: bool,
    brand: Option<String>,
    masked: Option<String>,
    error: Option<String>,
}

#[wasm_bindgen]
impl SubmitResult {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> Option<String> {
        self.brand.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn masked(&self) -> Option<String> {
        self.masked.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

/// Classifies a (partial) card number, returning the brand tag.
///
/// ```javascript
/// classify("3714")  // "amex"
/// ```
#[wasm_bindgen]
pub fn classify(card_number: &str) -> String {
    crate::classify(card_number).slug().to_string()
}

/// Formats a card number for a brand tag (`"visa"`, `"amex"`, ...).
#[wasm_bindgen]
pub fn format_number(card_number: &str, brand: &str) -> Result<String, JsValue> {
    let brand = CardBrand::from_slug(brand)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown brand: {}", brand)))?;
    Ok(crate::format_number(card_number, brand))
}

/// Returns the placeholder glyphs for a brand tag.
#[wasm_bindgen]
pub fn placeholder(brand: &str) -> Result<String, JsValue> {
    let brand = CardBrand::from_slug(brand)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown brand: {}", brand)))?;
    Ok(crate::grouping_for(brand).placeholder().to_string())
}

/// Luhn check of a card number.
#[wasm_bindgen]
pub fn is_valid(card_number: &str) -> bool {
    crate::is_valid(card_number)
}

/// First selectable month for the selected year.
#[wasm_bindgen]
pub fn min_valid_month(selected_year: u16, current_year: u16, current_month: u8) -> u8 {
    crate::min_valid_month(selected_year, current_year, current_month)
}

/// A card form owned by JavaScript.
#[wasm_bindgen]
pub struct CardFormHandle {
    inner: CardForm,
}

#[wasm_bindgen]
impl CardFormHandle {
    /// Creates a form with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardFormHandle {
        CardFormHandle {
            inner: CardForm::default(),
        }
    }

    pub fn input_number(&mut self, value: &str, deleted: bool) {
        let edit = if deleted {
            EditKind::Delete
        } else {
            EditKind::Insert
        };
        self.inner.input_number(value, edit);
    }

    pub fn input_name(&mut self, value: &str) {
        self.inner.input_name(value);
    }

    pub fn select_month(&mut self, value: &str) -> bool {
        self.inner.select_month(value)
    }

    pub fn select_year(&mut self, value: &str) -> bool {
        self.inner.select_year(value)
    }

    pub fn input_cvv(&mut self, value: &str) {
        self.inner.input_cvv(value);
    }

    /// Focus by element id (`"v-card-number"`, ...). Unknown ids are ignored.
    pub fn focus(&mut self, element_id: &str) {
        if let Some(field) = Field::from_element_id(element_id) {
            self.inner.focus(field);
        }
    }

    /// Blur by element id. Unknown ids are ignored.
    pub fn blur(&mut self, element_id: &str) {
        if let Some(field) = Field::from_element_id(element_id) {
            self.inner.blur(field);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn card_number(&self) -> String {
        self.inner.card_number().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn card_cvv(&self) -> String {
        self.inner.card_cvv().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.inner.brand().slug().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn flipped(&self) -> bool {
        self.inner.is_flipped()
    }

    /// Preview number glyphs, one per placeholder position.
    #[wasm_bindgen(getter)]
    pub fn preview_number(&self) -> String {
        self.inner.preview().number_text()
    }

    #[wasm_bindgen(getter)]
    pub fn artwork_asset(&self) -> String {
        self.inner.preview().artwork_asset()
    }

    /// Month options as `[{ value: "01", disabled: true }, ...]`.
    pub fn month_options(&self) -> Result<Array, JsValue> {
        let options = Array::new();
        for option in self.inner.month_options(YearMonth::today()) {
            let entry = Object::new();
            Reflect::set(&entry, &"value".into(), &option.value.into())?;
            Reflect::set(&entry, &"disabled".into(), &option.disabled.into())?;
            options.push(&entry);
        }
        Ok(options)
    }

    pub fn year_options(&self) -> Array {
        self.inner
            .year_options(YearMonth::today())
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    pub fn submit(&self) -> SubmitResult {
        match self.inner.submit() {
            Ok(number) => SubmitResult {
                valid: true,
                brand: Some(number.brand().slug().to_string()),
                masked: Some(number.masked()),
                error: None,
            },
            Err(e) => SubmitResult {
                valid: false,
                brand: None,
                masked: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for CardFormHandle {
    fn default() -> Self {
        Self::new()
    }
}
