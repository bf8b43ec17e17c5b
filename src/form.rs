//! In-memory state of the card entry form.
//!
//! The host forwards every input, selection, focus and blur event to a
//! [`CardForm`]; the form stores the derived values and the preview is
//! recomputed from them. Nothing is persisted, and the number, name and
//! CVV are zeroized when the form is cleared or dropped.

use tracing::{debug, info, warn};
use zeroize::Zeroize;

use crate::card::ValidatedNumber;
use crate::config::FormConfig;
use crate::detect::classify;
use crate::error::ValidationError;
use crate::expiry::{self, MonthOption, YearMonth};
use crate::focus::{Field, Focus, FocusEvent, FocusState};
use crate::format::{format_input, grouping_for, strip_formatting, EditKind, Grouping};
use crate::mask::mask_input;
use crate::preview::CardPreview;
use crate::validate::validate;
use crate::CardBrand;

/// State of a card entry form.
///
/// # Example
///
/// ```
/// use card_form::form::CardForm;
/// use card_form::focus::Field;
/// use card_form::format::EditKind;
/// use card_form::CardBrand;
///
/// let mut form = CardForm::default();
/// form.input_number("371449635398433", EditKind::Insert);
/// assert_eq!(form.card_number(), "3714 496353 98433");
/// assert_eq!(form.brand(), CardBrand::Amex);
///
/// form.focus(Field::Cvv);
/// assert!(form.is_flipped());
///
/// assert!(form.submit().is_ok());
/// ```
pub struct CardForm {
    config: FormConfig,
    card_number: String,
    card_name: String,
    card_month: String,
    card_year: String,
    card_cvv: String,
    focus: Focus,
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl CardForm {
    /// Creates an empty form.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            card_number: String::new(),
            card_name: String::new(),
            card_month: String::new(),
            card_year: String::new(),
            card_cvv: String::new(),
            focus: Focus::NONE,
        }
    }

    /// The form's configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Handles input in the number field.
    ///
    /// `value` is the raw field content after the edit. The stored value is
    /// its formatted form.
    pub fn input_number(&mut self, value: &str, edit: EditKind) {
        let before = self.brand();
        let formatted = format_input(value, edit);
        self.card_number.zeroize();
        self.card_number = formatted;

        let after = self.brand();
        if before != after {
            debug!(from = before.slug(), to = after.slug(), "card brand changed");
        }
    }

    /// Handles input in the holder name field.
    pub fn input_name(&mut self, value: &str) {
        self.card_name.zeroize();
        self.card_name = value.to_string();
    }

    /// Handles a month picker selection.
    ///
    /// An empty value clears the selection. Returns false, leaving the
    /// selection unchanged, for values that are not a month.
    pub fn select_month(&mut self, value: &str) -> bool {
        if value.is_empty() {
            self.card_month.clear();
            return true;
        }
        match expiry::parse_month(value) {
            Some(month) => {
                self.card_month = format!("{:02}", month);
                true
            }
            None => {
                debug!(value, "ignored invalid month selection");
                false
            }
        }
    }

    /// Handles a year picker selection.
    ///
    /// An empty value clears the selection. Returns false, leaving the
    /// selection unchanged, for values that are not a four-digit year.
    pub fn select_year(&mut self, value: &str) -> bool {
        if value.is_empty() {
            self.card_year.clear();
            return true;
        }
        match expiry::parse_year(value) {
            Some(year) => {
                self.card_year = year.to_string();
                true
            }
            None => {
                debug!(value, "ignored invalid year selection");
                false
            }
        }
    }

    /// Handles input in the CVV field. Keeps digits up to the configured length.
    pub fn input_cvv(&mut self, value: &str) {
        self.card_cvv.zeroize();
        self.card_cvv = value
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.config.cvv_max_len)
            .collect();
    }

    /// Applies a focus or blur event.
    pub fn handle(&mut self, event: FocusEvent) {
        let next = self.focus.apply(event);
        if next != self.focus {
            debug!(?event, from = ?self.focus.field(), to = ?next.field(), "focus changed");
        }
        self.focus = next;
    }

    /// Shorthand for `handle(FocusEvent::Focus(field))`.
    pub fn focus(&mut self, field: Field) {
        self.handle(FocusEvent::Focus(field));
    }

    /// Shorthand for `handle(FocusEvent::Blur(field))`.
    pub fn blur(&mut self, field: Field) {
        self.handle(FocusEvent::Blur(field));
    }

    /// The formatted card number, as shown in the field.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The card number digits.
    pub fn raw_digits(&self) -> String {
        strip_formatting(&self.card_number)
    }

    /// The holder name.
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    /// The selected month (`"01"`..`"12"`), or empty.
    pub fn card_month(&self) -> &str {
        &self.card_month
    }

    /// The selected year, or empty.
    pub fn card_year(&self) -> &str {
        &self.card_year
    }

    /// The CVV digits.
    pub fn card_cvv(&self) -> &str {
        &self.card_cvv
    }

    /// The current focus state.
    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    /// The focused field, if any.
    pub fn focused_field(&self) -> Option<Field> {
        self.focus.field()
    }

    /// True while the preview shows the back of the card.
    pub fn is_flipped(&self) -> bool {
        self.focus_state().is_flipped()
    }

    /// The classified brand of the current number.
    pub fn brand(&self) -> CardBrand {
        classify(&self.card_number)
    }

    /// The grouping of the current number's brand.
    pub fn grouping(&self) -> Grouping {
        grouping_for(self.brand())
    }

    /// First selectable month given the selected year.
    pub fn min_month(&self, today: YearMonth) -> u8 {
        expiry::parse_year(&self.card_year).map_or(1, |year| {
            expiry::min_valid_month(year, today.year(), today.month())
        })
    }

    /// Month picker options given the selected year.
    pub fn month_options(&self, today: YearMonth) -> Vec<MonthOption> {
        expiry::month_options(self.min_month(today))
    }

    /// Year picker options starting at the current year.
    pub fn year_options(&self, today: YearMonth) -> Vec<u16> {
        expiry::year_options(today.year(), self.config.year_span)
    }

    /// Validates the entered number.
    ///
    /// Failures are returned, not surfaced; the host decides how to show
    /// them.
    pub fn submit(&self) -> Result<ValidatedNumber, ValidationError> {
        match validate(&self.card_number) {
            Ok(number) => {
                info!(brand = number.brand().slug(), number = %number.masked(), "card number accepted");
                Ok(number)
            }
            Err(e) => {
                warn!(number = %mask_input(&self.card_number), error = %e, "card number rejected");
                Err(e)
            }
        }
    }

    /// The card preview for the current state.
    pub fn preview(&self) -> CardPreview {
        CardPreview::from_form(self)
    }

    /// Resets every field and the focus, zeroizing the entered data.
    pub fn clear(&mut self) {
        self.card_number.zeroize();
        self.card_name.zeroize();
        self.card_month.clear();
        self.card_year.clear();
        self.card_cvv.zeroize();
        self.focus = Focus::NONE;
    }
}

impl Drop for CardForm {
    fn drop(&mut self) {
        self.clear();
    }
}
