//! Fuzz target for card validation.
//!
//! Tests that validation never panics and agrees with the checksum.

#![no_main]

use card_form::{classify, is_valid, luhn, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = classify(data);
    let valid = is_valid(data);

    if let Ok(number) = validate(data) {
        assert!(valid, "accepted number must pass Luhn");
        assert_eq!(number.brand(), classify(data));
        let visible = number.masked().chars().filter(char::is_ascii_digit).count();
        assert_eq!(visible, number.length().min(4));
    }

    // Raw bytes interpreted as digits
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    let _ = luhn::validate(&digits);
});
