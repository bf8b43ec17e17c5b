//! Fuzz target for card formatting.
//!
//! Tests that formatting never panics and keeps its grouping invariants.

#![no_main]

use card_form::format::{self, EditKind, SEPARATOR};
use card_form::{grouping_for, CardBrand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for brand in CardBrand::KNOWN.into_iter().chain([CardBrand::Unknown]) {
        let formatted = format::format_number(data, brand);
        assert!(formatted.len() <= grouping_for(brand).placeholder().len());
        assert!(!formatted.ends_with(SEPARATOR));

        // Reformatting is a no-op
        assert_eq!(format::format_number(&formatted, brand), formatted);
    }

    let inserted = format::format_input(data, EditKind::Insert);
    let deleted = format::format_input(data, EditKind::Delete);
    assert!(!deleted.ends_with(SEPARATOR));
    assert_eq!(
        format::strip_formatting(&inserted),
        format::strip_formatting(&deleted)
    );
});
