//! Card preview model.
//!
//! Everything the animated card shows, as data: the number drawn over the
//! brand placeholder, the holder name, the expiry, the masked CVV, the
//! brand artwork, and whether the card is flipped and which element is
//! highlighted. Hosts animate between successive previews;
//! [`CardPreview::render_text`] draws one as text for terminals.

use crate::expiry::short_year;
use crate::focus::PreviewElement;
use crate::form::CardForm;
use crate::format::grouping_for;
use crate::mask::mask_cvv;
use crate::CardBrand;

/// Shown in place of an empty holder name.
pub const HOLDER_PLACEHOLDER: &str = "FULL NAME";
/// Shown in place of an unselected month.
pub const MONTH_PLACEHOLDER: &str = "MM";
/// Shown in place of an unselected year.
pub const YEAR_PLACEHOLDER: &str = "YY";

const INNER_WIDTH: usize = 32;
const NAME_WIDTH: usize = 18;

/// A snapshot of the card preview.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardPreview {
    /// Brand classified from the number.
    pub brand: CardBrand,
    /// Brand whose artwork is shown, after the configured fallback.
    pub artwork: CardBrand,
    /// Placeholder of the brand grouping.
    pub placeholder: &'static str,
    /// One glyph per placeholder position: the typed character where there
    /// is one, the placeholder glyph otherwise.
    pub number_slots: Vec<char>,
    /// Holder name split on spaces; empty when no name was entered.
    pub holder_parts: Vec<String>,
    /// Month label.
    pub month: String,
    /// Two-digit year label.
    pub year: String,
    /// One `*` per CVV digit.
    pub cvv: String,
    /// True when the back of the card faces the user.
    pub flipped: bool,
    /// Highlighted element, if any.
    pub highlighted: Option<PreviewElement>,
}

impl CardPreview {
    /// Builds the preview for a form's current state.
    pub fn from_form(form: &CardForm) -> Self {
        let brand = form.brand();
        let placeholder = grouping_for(brand).placeholder();
        let typed: Vec<char> = form.card_number().chars().collect();
        let number_slots = placeholder
            .chars()
            .enumerate()
            .map(|(i, glyph)| typed.get(i).copied().unwrap_or(glyph))
            .collect();

        let holder_parts = if form.card_name().is_empty() {
            Vec::new()
        } else {
            form.card_name().split(' ').map(str::to_string).collect()
        };

        let month = if form.card_month().is_empty() {
            MONTH_PLACEHOLDER.to_string()
        } else {
            form.card_month().to_string()
        };
        let year = if form.card_year().is_empty() {
            YEAR_PLACEHOLDER.to_string()
        } else {
            short_year(form.card_year())
        };

        let focus = form.focus_state();
        Self {
            brand,
            artwork: form.config().brand_fallback.resolve(brand),
            placeholder,
            number_slots,
            holder_parts,
            month,
            year,
            cvv: mask_cvv(form.card_cvv()),
            flipped: focus.is_flipped(),
            highlighted: focus.highlighted(),
        }
    }

    /// The number area as a string.
    pub fn number_text(&self) -> String {
        self.number_slots.iter().collect()
    }

    /// The holder name as displayed.
    pub fn holder_text(&self) -> String {
        if self.holder_parts.is_empty() {
            HOLDER_PLACEHOLDER.to_string()
        } else {
            self.holder_parts.join(" ")
        }
    }

    /// The expiry as displayed, `MM/YY`.
    pub fn expiry_text(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }

    /// Asset path of the brand artwork.
    pub fn artwork_asset(&self) -> String {
        format!("/assets/{}.png", self.artwork.slug())
    }

    /// Draws the visible side of the card as framed text.
    ///
    /// The highlighted element is wrapped in brackets.
    pub fn render_text(&self) -> String {
        let logo = self.artwork.slug().to_ascii_uppercase();
        let lines = if self.flipped {
            vec![
                "=".repeat(INNER_WIDTH),
                String::new(),
                format!("{:>30}  ", "CVV"),
                format!("  {:>28}  ", self.mark(PreviewElement::Cvv, &self.cvv)),
                String::new(),
                format!("{:>30}  ", logo),
            ]
        } else {
            let holder: String = self.holder_text().chars().take(NAME_WIDTH).collect();
            vec![
                format!(" {:<20}{:>10} ", "[chip]", logo),
                String::new(),
                format!("  {:<30}", self.mark(PreviewElement::Number, &self.number_text())),
                String::new(),
                format!("  {:<20}{:<10}", "Card Holder", "Expires"),
                format!(
                    " {:<20} {:<10}",
                    self.mark(PreviewElement::Holder, &holder),
                    self.mark(PreviewElement::Expiry, &self.expiry_text())
                ),
            ]
        };

        let border = format!("+{}+", "-".repeat(INNER_WIDTH));
        let mut out = String::with_capacity((INNER_WIDTH + 3) * (lines.len() + 2));
        out.push_str(&border);
        out.push('\n');
        for line in lines {
            out.push_str(&format!("|{:<width$}|\n", line, width = INNER_WIDTH));
        }
        out.push_str(&border);
        out.push('\n');
        out
    }

    fn mark(&self, element: PreviewElement, text: &str) -> String {
        if self.highlighted == Some(element) {
            format!("[{}]", text)
        } else {
            format!(" {} ", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BrandFallback, FormConfig};
    use crate::focus::Field;
    use crate::format::EditKind;

    #[test]
    fn test_empty_form_preview() {
        let preview = CardForm::default().preview();
        assert_eq!(preview.brand, CardBrand::Unknown);
        assert_eq!(preview.artwork, CardBrand::Visa);
        assert_eq!(preview.number_text(), "#### #### #### ####");
        assert_eq!(preview.holder_text(), "FULL NAME");
        assert_eq!(preview.expiry_text(), "MM/YY");
        assert_eq!(preview.cvv, "");
        assert!(!preview.flipped);
        assert_eq!(preview.highlighted, None);
        assert_eq!(preview.artwork_asset(), "/assets/visa.png");
    }

    #[test]
    fn test_number_drawn_over_placeholder() {
        let mut form = CardForm::default();
        form.input_number("3714496", EditKind::Insert);
        let preview = form.preview();
        assert_eq!(preview.placeholder, "#### ###### #####");
        assert_eq!(preview.number_text(), "3714 496### #####");
        assert_eq!(preview.number_slots.len(), preview.placeholder.len());
    }

    #[test]
    fn test_unknown_fallback_configurable() {
        let mut form = CardForm::new(FormConfig {
            brand_fallback: BrandFallback::Unknown,
            ..FormConfig::default()
        });
        form.input_number("1234", EditKind::Insert);
        let preview = form.preview();
        assert_eq!(preview.artwork, CardBrand::Unknown);
        assert_eq!(preview.artwork_asset(), "/assets/unknown.png");
    }

    #[test]
    fn test_holder_expiry_and_cvv() {
        let mut form = CardForm::default();
        form.input_name("JANE Q DOE");
        form.select_month("4");
        form.select_year("2031");
        form.input_cvv("987");
        let preview = form.preview();
        assert_eq!(preview.holder_parts, vec!["JANE", "Q", "DOE"]);
        assert_eq!(preview.expiry_text(), "04/31");
        assert_eq!(preview.cvv, "***");
    }

    #[test]
    fn test_flip_and_highlight() {
        let mut form = CardForm::default();
        form.focus(Field::Year);
        let preview = form.preview();
        assert!(!preview.flipped);
        assert_eq!(preview.highlighted, Some(PreviewElement::Expiry));

        form.focus(Field::Cvv);
        let preview = form.preview();
        assert!(preview.flipped);
        assert_eq!(preview.highlighted, Some(PreviewElement::Cvv));
    }

    #[test]
    fn test_render_front() {
        let mut form = CardForm::default();
        form.input_number("4539148803436467", EditKind::Insert);
        form.focus(Field::Number);
        let text = form.preview().render_text();
        assert!(text.contains("[4539 1488 0343 6467]"));
        assert!(text.contains("VISA"));
        assert!(text.contains(" FULL NAME "));
        for line in text.lines() {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "{:?}", line);
        }
    }

    #[test]
    fn test_render_back_hides_cvv() {
        let mut form = CardForm::default();
        form.input_cvv("123");
        form.focus(Field::Cvv);
        let text = form.preview().render_text();
        assert!(text.contains("[***]"));
        assert!(!text.contains("123"));
        for line in text.lines() {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "{:?}", line);
        }
    }
}
