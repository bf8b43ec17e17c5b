//! Fuzz target for the form state.
//!
//! Replays arbitrary sequences of edits and focus changes.

#![no_main]

use arbitrary::Arbitrary;
use card_form::focus::{Field, FocusState};
use card_form::format::EditKind;
use card_form::{CardForm, MAX_INPUT_LEN};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FieldInput {
    Number,
    Name,
    Month,
    Year,
    Cvv,
}

impl From<&FieldInput> for Field {
    fn from(input: &FieldInput) -> Self {
        match input {
            FieldInput::Number => Field::Number,
            FieldInput::Name => Field::Name,
            FieldInput::Month => Field::Month,
            FieldInput::Year => Field::Year,
            FieldInput::Cvv => Field::Cvv,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Action {
    Number(String, bool),
    Name(String),
    Month(String),
    Year(String),
    Cvv(String),
    Focus(FieldInput),
    Blur(FieldInput),
    Submit,
    Clear,
}

fuzz_target!(|actions: Vec<Action>| {
    let mut form = CardForm::default();

    for action in &actions {
        match action {
            Action::Number(value, deleted) => {
                let edit = if *deleted {
                    EditKind::Delete
                } else {
                    EditKind::Insert
                };
                form.input_number(value, edit);
            }
            Action::Name(value) => form.input_name(value),
            Action::Month(value) => {
                form.select_month(value);
            }
            Action::Year(value) => {
                form.select_year(value);
            }
            Action::Cvv(value) => form.input_cvv(value),
            Action::Focus(field) => form.focus(field.into()),
            Action::Blur(field) => form.blur(field.into()),
            Action::Submit => {
                let _ = form.submit();
            }
            Action::Clear => form.clear(),
        }

        assert!(form.card_number().len() <= MAX_INPUT_LEN);
        assert!(form.card_cvv().len() <= form.config().cvv_max_len);
        assert_eq!(form.is_flipped(), form.focus_state() == FocusState::CardCvv);

        let preview = form.preview();
        let _ = preview.render_text();
    }
});
