//! Which form field holds focus, and what that means for the preview.
//!
//! [`Focus`] records the focused [`Field`] and is updated by discrete focus
//! and blur events; [`FocusState`] is the logical view derived from it,
//! with both expiry pickers collapsed into one date state. The preview
//! highlights the element matching the focused field and
//! shows the back of the card while the CVV field is focused.

use std::fmt;

/// Input fields of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// Card number input.
    Number,
    /// Card holder name input.
    Name,
    /// Expiry month picker.
    Month,
    /// Expiry year picker.
    Year,
    /// CVV input.
    Cvv,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [Self::Number, Self::Name, Self::Month, Self::Year, Self::Cvv];

    /// Element id of the field, shared by the input and its preview label.
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Number => "v-card-number",
            Self::Name => "v-card-name",
            Self::Month => "v-card-month",
            Self::Year => "v-card-year",
            Self::Cvv => "v-card-cvv",
        }
    }

    /// Looks a field up by its element id.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }

    /// The focus state this field produces when focused.
    pub const fn focus_state(&self) -> FocusState {
        match self {
            Self::Number => FocusState::CardNumber,
            Self::Name => FocusState::CardName,
            Self::Month | Self::Year => FocusState::CardDate,
            Self::Cvv => FocusState::CardCvv,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// A focus change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// The field gained focus.
    Focus(Field),
    /// The field lost focus.
    Blur(Field),
}

/// Elements of the card preview that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PreviewElement {
    /// Number area on the front.
    Number,
    /// Holder name area on the front.
    Holder,
    /// Expiry area on the front.
    Expiry,
    /// CVV band on the back.
    Cvv,
}

/// The logical field currently holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FocusState {
    /// Nothing focused.
    #[default]
    None,
    /// The number input.
    CardNumber,
    /// The holder name input.
    CardName,
    /// Either expiry picker.
    CardDate,
    /// The CVV input.
    CardCvv,
}

impl FocusState {
    /// True while the back of the card is shown.
    #[inline]
    pub const fn is_flipped(&self) -> bool {
        matches!(self, Self::CardCvv)
    }

    /// The preview element to highlight, if any.
    pub const fn highlighted(&self) -> Option<PreviewElement> {
        match self {
            Self::None => None,
            Self::CardNumber => Some(PreviewElement::Number),
            Self::CardName => Some(PreviewElement::Holder),
            Self::CardDate => Some(PreviewElement::Expiry),
            Self::CardCvv => Some(PreviewElement::Cvv),
        }
    }
}

/// The field currently holding focus.
///
/// A blur only clears focus when it comes from the focused field, so a
/// late `Blur(Month)` after `Focus(Year)` leaves the year focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    field: Option<Field>,
}

impl Focus {
    /// Nothing focused.
    pub const NONE: Focus = Focus { field: None };

    /// Applies a focus event.
    ///
    /// | event      | result                                         |
    /// |------------|------------------------------------------------|
    /// | `Focus(f)` | `f` focused                                    |
    /// | `Blur(f)`  | nothing focused if `f` is focused, else unchanged |
    #[must_use]
    pub fn apply(self, event: FocusEvent) -> Focus {
        match event {
            FocusEvent::Focus(field) => Focus { field: Some(field) },
            FocusEvent::Blur(field) if self.field == Some(field) => Focus::NONE,
            FocusEvent::Blur(_) => self,
        }
    }

    /// The focused field, if any.
    #[inline]
    pub const fn field(&self) -> Option<Field> {
        self.field
    }

    /// The logical focus state.
    pub const fn state(&self) -> FocusState {
        match self.field {
            Some(field) => field.focus_state(),
            None => FocusState::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(events: &[FocusEvent]) -> Focus {
        events.iter().fold(Focus::NONE, |focus, &event| focus.apply(event))
    }

    #[test]
    fn test_focus_sets_state() {
        let focus = Focus::NONE.apply(FocusEvent::Focus(Field::Name));
        assert_eq!(focus.field(), Some(Field::Name));
        assert_eq!(focus.state(), FocusState::CardName);
        assert_eq!(
            focus.apply(FocusEvent::Focus(Field::Year)).state(),
            FocusState::CardDate
        );
    }

    #[test]
    fn test_blur_clears_only_focused_field() {
        let focus = Focus::NONE.apply(FocusEvent::Focus(Field::Number));
        assert_eq!(focus.apply(FocusEvent::Blur(Field::Number)), Focus::NONE);
        assert_eq!(focus.apply(FocusEvent::Blur(Field::Cvv)), focus);
    }

    #[test]
    fn test_month_to_year_keeps_date_focus() {
        let focus = replay(&[
            FocusEvent::Focus(Field::Month),
            FocusEvent::Blur(Field::Month),
            FocusEvent::Focus(Field::Year),
        ]);
        assert_eq!(focus.state(), FocusState::CardDate);
        assert_eq!(focus.state().highlighted(), Some(PreviewElement::Expiry));
    }

    #[test]
    fn test_late_month_blur_keeps_year_focused() {
        let focus = replay(&[
            FocusEvent::Focus(Field::Month),
            FocusEvent::Focus(Field::Year),
            FocusEvent::Blur(Field::Month),
        ]);
        assert_eq!(focus.field(), Some(Field::Year));
        assert_eq!(focus.state(), FocusState::CardDate);

        let focus = focus.apply(FocusEvent::Blur(Field::Year));
        assert_eq!(focus.state(), FocusState::None);
    }

    #[test]
    fn test_flip_follows_cvv() {
        let focus = Focus::NONE.apply(FocusEvent::Focus(Field::Cvv));
        assert!(focus.state().is_flipped());
        assert!(!focus.apply(FocusEvent::Blur(Field::Cvv)).state().is_flipped());
        assert!(!FocusState::CardDate.is_flipped());
    }

    #[test]
    fn test_nothing_highlighted_without_focus() {
        assert_eq!(FocusState::default().highlighted(), None);
        assert_eq!(Focus::default().state(), FocusState::None);
    }

    #[test]
    fn test_element_ids() {
        for field in Field::ALL {
            assert_eq!(Field::from_element_id(field.element_id()), Some(field));
        }
        assert_eq!(Field::Cvv.to_string(), "v-card-cvv");
        assert_eq!(Field::from_element_id("v-card-zip"), None);
    }
}
