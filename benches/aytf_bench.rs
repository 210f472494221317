use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rlibphonenumber_aytf::{NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberUtil};

fn setup_util() -> PhoneNumberUtil {
    let us = PhoneMetadata::new("US", 1)
        .with_international_prefix("011")
        .with_national_prefix("1")
        .with_main_country_for_code(true)
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{4})", "$1 $2")
                .with_national_prefix_optional_when_formatting(true),
        )
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3")
                .with_national_prefix_optional_when_formatting(true),
        );
    let gb = PhoneMetadata::new("GB", 44)
        .with_international_prefix("00")
        .with_national_prefix("0")
        .with_number_format(
            NumberFormat::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3")
                .with_leading_digits(["[1-59]|[78]0"])
                .with_national_prefix_formatting_rule("0$1"),
        )
        .with_number_format(
            NumberFormat::new(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3")
                .with_leading_digits(["7[1-57-9]"])
                .with_national_prefix_formatting_rule("0$1"),
        );
    let de = PhoneMetadata::new("DE", 49)
        .with_international_prefix("00")
        .with_national_prefix("0")
        .with_number_format(
            NumberFormat::new(r"(\d{2})(\d{3,11})", "$1/$2")
                .with_leading_digits(["3[02]|40|[68]9"])
                .with_national_prefix_formatting_rule("0$1"),
        );
    PhoneNumberUtil::new_for_metadata(PhoneMetadataCollection::new(vec![us, gb, de]))
}

fn setup_numbers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("6502532222", "US"),
        ("16502532222", "US"),
        ("011442070313000", "US"),
        ("+4907912345678", "US"),
        ("02070313000", "GB"),
        ("+44 20 7031", "GB"),
        ("030123456", "DE"),
        ("1-800-FLOWERS", "US"),
    ]
}

fn as_you_type_benchmark(c: &mut Criterion) {
    let phone_util = setup_util();
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("As You Type");

    group.bench_function("input_digit", |b| {
        b.iter(|| {
            for (number, region) in &numbers {
                let mut formatter = phone_util.get_as_you_type_formatter(region);
                for c in number.chars() {
                    black_box(formatter.input_digit(black_box(c)));
                }
            }
        })
    });

    group.bench_function("input_digit after clear", |b| {
        let mut formatter = phone_util.get_as_you_type_formatter("US");
        b.iter(|| {
            formatter.clear();
            for c in "6502532222".chars() {
                black_box(formatter.input_digit(black_box(c)));
            }
        })
    });

    group.bench_function("parse_phone_context", |b| {
        b.iter(|| {
            black_box(
                phone_util
                    .parse_phone_context(black_box("tel:03-331-6005;phone-context=+44-20"))
                    .ok(),
            );
        })
    });

    group.finish();
}

criterion_group!(benches, as_you_type_benchmark);
criterion_main!(benches);
