use rstest::rstest;
use unit_formatter::{
    bit_format, byte_format, format, scale_measurement, FormatError, MeasurementType, MAX_VALUE,
    UNIT_NAMES,
};

#[rstest]
#[case::zero(0.0, "D", "0 Bytes")]
#[case::one(1.0, "DF", "1 Byte")]
#[case::decimal(1536.0, "D", "1.5 KB")]
#[case::decimal_lower(1536.0, "d", "1.5 kb")]
#[case::binary_lower(1536.0, "b", "1.5 kib")]
#[case::single_letter_unscaled(512.0, "S", "512 B")]
#[case::single_letter_unscaled_lower(512.0, "s", "512 b")]
fn byte_examples(#[case] value: f64, #[case] code: &str, #[case] expected: &str) {
    assert_eq!(byte_format(value, code).unwrap(), expected);
}

#[test]
fn bit_full_word() {
    assert_eq!(bit_format(1_500_000.0, "DF").unwrap(), "1.5 Megabit");
}

#[test]
fn format_defaults_to_bytes() {
    assert_eq!(format(1_500_000.0, false, "DF").unwrap(), "1.43 Megabyte");
    assert_eq!(format(1_500_000.0, true, "DF").unwrap(), "1.5 Megabit");
}

#[rstest]
#[case(-1.0)]
#[case(1.24e27)]
#[case(f64::INFINITY)]
fn out_of_range_fails(#[case] value: f64) {
    assert_eq!(byte_format(value, "D"), Err(FormatError::InvalidRange(value)));
    assert_eq!(bit_format(value, "D"), Err(FormatError::InvalidRange(value)));
}

#[test]
fn unknown_code_fails() {
    assert_eq!(
        byte_format(100.0, "X"),
        Err(FormatError::InvalidUnitFormat("X".to_string()))
    );
}

#[test]
fn maximum_is_accepted_at_yotta() {
    let scaled = scale_measurement(MAX_VALUE, MeasurementType::Byte).unwrap();
    assert_eq!(scaled.unit_name(), "Yotta");
    assert_eq!(byte_format(MAX_VALUE, "BF").unwrap(), "1024 Yobibyte");
}

#[test]
fn powers_of_the_base_show_one_of_each_unit() {
    for (n, name) in UNIT_NAMES.iter().enumerate().skip(1) {
        let bytes = byte_format(1024f64.powi(n as i32), "DF").unwrap();
        assert_eq!(bytes, format!("1 {}byte", name));

        let bits = bit_format(1000f64.powi(n as i32), "DF").unwrap();
        assert_eq!(bits, format!("1 {}bit", name));
    }
}

#[test]
fn displayed_quantity_stays_below_the_base() {
    // Values straddling each boundary, including ones that round up to it
    for n in 1..UNIT_NAMES.len() as i32 {
        for factor in [0.99999, 0.999999, 1.0, 1.000001] {
            let value = 1024f64.powi(n) * factor;
            let text = byte_format(value, "D").unwrap();
            let quantity: f64 = text.split(' ').next().unwrap().parse().unwrap();
            assert!(quantity < 1024.0, "{value} rendered as {text}");
        }
    }
}

#[test]
fn rounding_up_to_the_base_moves_to_the_next_unit() {
    assert_eq!(byte_format(1024.0 * 1023.9999, "D").unwrap(), "1 MB");
    assert_eq!(bit_format(999_999.9, "D").unwrap(), "1 MB");
}

#[test]
fn formatting_is_deterministic() {
    for value in [0.0, 1.0, 999.0, 123_456.789, 9.87e20, MAX_VALUE] {
        for code in ["BF", "bf", "DF", "df", "S", "s", "B", "b", "D", "d"] {
            let first = byte_format(value, code).unwrap();
            assert_eq!(byte_format(value, code).unwrap(), first);
            let first = bit_format(value, code).unwrap();
            assert_eq!(bit_format(value, code).unwrap(), first);
        }
    }
}

#[test]
fn unit_index_is_monotonic_in_value() {
    let mut previous = 0;
    let mut value = 1.0;
    while value <= MAX_VALUE {
        let index = scale_measurement(value, MeasurementType::Bit).unwrap().unit_index;
        assert!(index >= previous);
        previous = index;
        value *= 3.3;
    }
}
