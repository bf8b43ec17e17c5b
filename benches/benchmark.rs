//! Benchmarks for card_form hot paths.
//!
//! Run with: cargo bench

use card_form::focus::Field;
use card_form::format::{self, EditKind};
use card_form::{classify, detect, luhn, validate, CardBrand, CardForm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111 1111 1111 1111";
const MASTERCARD: &str = "5555555555554444";
const AMEX: &str = "378282246310006";
const DINERS: &str = "30569309025904";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
const AMEX_DIGITS: [u8; 15] = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 6];

/// Benchmark brand detection
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("visa", |b| b.iter(|| classify(black_box(VISA_16))));

    // JCB is the last pattern tried
    group.bench_function("jcb", |b| {
        b.iter(|| classify(black_box("3566002020360505")))
    });

    group.bench_function("unknown", |b| {
        b.iter(|| classify(black_box("1234567812345670")))
    });

    group.bench_function("digits_only", |b| {
        b.iter(|| detect::classify_digits(black_box(&VISA_DIGITS[..4])))
    });

    group.finish();
}

/// Benchmark grouping
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for (name, number, brand) in [
        ("visa", VISA_16, CardBrand::Visa),
        ("amex", AMEX, CardBrand::Amex),
        ("diners", DINERS, CardBrand::DinersClub),
    ] {
        group.bench_with_input(BenchmarkId::new("format_number", name), &number, |b, n| {
            b.iter(|| format::format_number(black_box(n), brand))
        });
    }

    group.bench_function("format_input_insert", |b| {
        b.iter(|| format::format_input(black_box("4111 1111 11111"), EditKind::Insert))
    });

    group.bench_function("format_input_delete", |b| {
        b.iter(|| format::format_input(black_box("4111 1111 "), EditKind::Delete))
    });

    group.bench_function("strip_formatting", |b| {
        b.iter(|| format::strip_formatting(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("luhn_15", |b| {
        b.iter(|| luhn::validate(black_box(&AMEX_DIGITS)))
    });

    group.bench_function("check_digit", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.bench_function("passes_formatted", |b| {
        b.iter(|| luhn::passes(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

/// Benchmark full validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("visa_16_raw", |b| b.iter(|| validate(black_box(VISA_16))));

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| validate(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("mastercard", |b| {
        b.iter(|| validate(black_box(MASTERCARD)))
    });

    group.bench_function("amex_15", |b| b.iter(|| validate(black_box(AMEX))));

    group.bench_function("invalid_checksum", |b| {
        b.iter(|| validate(black_box("4111111111111112")))
    });

    let card = validate(VISA_16).unwrap();
    group.bench_function("masked", |b| b.iter(|| black_box(&card).masked()));

    group.finish();
}

/// Benchmark a full typing session through the form
fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");

    group.throughput(Throughput::Elements(VISA_16.len() as u64));
    group.bench_function("type_number", |b| {
        b.iter(|| {
            let mut form = CardForm::default();
            for ch in VISA_16.chars() {
                let next = format!("{}{}", form.card_number(), ch);
                form.input_number(black_box(&next), EditKind::Insert);
            }
            form.focus(Field::Cvv);
            form.input_cvv("123");
            black_box(form.preview())
        })
    });

    let mut form = CardForm::default();
    form.input_number(VISA_16, EditKind::Insert);
    form.input_name("JANE DOE");
    form.select_month("04");
    form.select_year("2031");

    group.bench_function("preview", |b| b.iter(|| black_box(&form).preview()));

    group.bench_function("render_text", |b| {
        let preview = form.preview();
        b.iter(|| black_box(&preview).render_text())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_format,
    bench_luhn,
    bench_validation,
    bench_form,
);

criterion_main!(benches);
